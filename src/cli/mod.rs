//! Terminal collaborators: confirmation prompts, the interactive console
//! and die rendering.

pub mod confirm;
pub mod console;
pub mod display;

pub use confirm::{confirm, Answer, Ask, MAX_TRIES};
pub use console::Console;
pub use display::render_die;
