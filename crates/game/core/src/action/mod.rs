//! Player input vocabulary.
//!
//! The only action the progression core understands is a single-step
//! directional move; everything else (confirmation gestures, quitting) is
//! handled by the session layer.
mod movement;

pub use movement::{Direction, DirectionError};
