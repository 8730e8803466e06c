//! Delayed level transitions.
//!
//! At most one transition is pending at a time. Scheduling a new one replaces
//! the old, and dropping the scheduler aborts whatever is still waiting so a
//! stale transition can never fire after the session has moved on.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::Navigator;

pub struct TransitionScheduler {
    navigator: Arc<dyn Navigator>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl TransitionScheduler {
    pub fn new(navigator: Arc<dyn Navigator>, delay: Duration) -> Self {
        Self {
            navigator,
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Navigates to `level_id` after the configured delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, game_id: &str, level_id: &str) {
        if self.cancel() {
            debug!("replaced pending level transition");
        }

        let navigator = Arc::clone(&self.navigator);
        let delay = self.delay;
        let game_id = game_id.to_string();
        let level_id = level_id.to_string();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            info!(game = %game_id, level = %level_id, "level transition");
            if let Err(e) = navigator.navigate_to_level(&game_id, &level_id).await {
                warn!(level = %level_id, error = %e, "level transition failed");
            }
        }));
    }

    /// Aborts the pending transition. Returns whether one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TransitionScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
