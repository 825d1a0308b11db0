//! Terminal rendition of the board: one glyph per cell, a control panel for
//! the match settings and a status line.
pub mod input;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod theme;

pub use input::{map_key, map_mouse};
pub use render::draw;
pub use terminal::{setup_terminal, TerminalGuard};
