//! Terminal output formatting
//!
//! The gallows frame plus colored messages for the start and end of a game.

pub mod display;
pub mod renderer;

pub use display::{abandon_message, banner, loss_message, print_list_summary, win_message};
pub use renderer::{GUESS_BOX_WIDTH, render_frame, render_game};
