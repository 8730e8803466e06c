//! Session orchestration for the progression core.
//!
//! This crate turns player input into [`game_core::GameState`] mutations and
//! the side effects around them: rendering, NPC dialogue, cutscenes and
//! delayed level transitions. Collaborators are injected as trait objects so
//! the terminal client, tests and other hosts can plug in their own.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes collaborator traits and the runtime error type
//! - [`use_cases`] hosts the movement, NPC, progression and selection flows
//! - [`scheduler`] owns the cancellable delayed level transition
//! - [`navigation`] provides the [`Navigator`] implementations
//! - [`services`] ships default dialogue and cutscene collaborators
//! - [`session`] ties state and use cases together for one player
pub mod api;
pub mod config;
pub mod navigation;
pub mod scheduler;
pub mod services;
pub mod session;
pub mod use_cases;

pub use api::{
    Celebration, Cutscene, CutsceneKey, CutsceneKind, CutscenePlayer, CutsceneService,
    DialogueService, EncouragementContext, MessageKind, MessageOptions, Milestone, Navigator,
    Renderer, Result, RuntimeError,
};
pub use config::RuntimeConfig;
pub use navigation::{SessionCommand, SessionNavigator, UrlNavigator, with_query_param};
pub use scheduler::TransitionScheduler;
pub use services::{InMemoryCutsceneService, MentorDialogueService};
pub use session::GameSession;
pub use use_cases::{
    CutsceneHooks, HandleProgressionUseCase, MovePlayerUseCase, MoveOutcome,
    MoveRejection, NpcInteraction, NpcInteractionUseCase, SelectGameUseCase,
};
