//! Concrete collaborator implementations shipped with the runtime.
mod cutscene;
mod dialogue;

pub use cutscene::InMemoryCutsceneService;
pub use dialogue::MentorDialogueService;
