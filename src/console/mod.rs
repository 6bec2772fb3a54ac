//! Line-oriented front end: plain-text board rendering, column prompts, and
//! the play-again loop.

mod prompt;
mod render;
mod session;

pub use prompt::{column_request, parse_column, wants_to_quit};
pub use render::render_board;
pub use session::Session;
