//! # Views
//!
//! Terminal rendering of the view model.

pub mod terminal_renderer;

pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
