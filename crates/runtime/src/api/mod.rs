//! Public runtime API surface.
//!
//! Collaborator traits the use cases call into, plus the error type every
//! runtime operation returns.

pub mod cutscene;
pub mod dialogue;
pub mod errors;
pub mod navigator;
pub mod renderer;

pub use cutscene::{Cutscene, CutsceneKey, CutsceneKind, CutscenePlayer, CutsceneService};
pub use dialogue::{Celebration, DialogueService, EncouragementContext, Milestone};
pub use errors::{Result, RuntimeError};
pub use navigator::Navigator;
pub use renderer::{MessageKind, MessageOptions, Renderer};
