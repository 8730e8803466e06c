//! Terminal presentation for the client.
pub mod cutscene;
pub mod event_loop;
pub mod message;
pub mod renderer;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod view;

pub use cutscene::TerminalCutscenePlayer;
pub use event_loop::EventLoop;
pub use renderer::TuiRenderer;
pub use view::Screen;
