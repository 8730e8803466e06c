//! Use cases that drive [`game_core::GameState`] in response to player input.
//!
//! The movement pipeline is [`MovePlayerUseCase`]; it embeds NPC interaction
//! and, when wired, progression handling.
mod move_player;
mod npc_interaction;
mod progression;
mod select_game;

pub use move_player::{MoveOutcome, MovePlayerUseCase, MoveRejection};
pub use npc_interaction::{NpcInteraction, NpcInteractionUseCase};
pub use progression::{CutsceneHooks, HandleProgressionUseCase};
pub use select_game::SelectGameUseCase;
