//! # I/O Abstraction Layer
//!
//! Trait seams for input events and terminal rendering so the controller and
//! renderer can run against either a real terminal or test doubles.
//!
//! Production implementations wrap crossterm; mock implementations feed
//! pre-programmed events and record render commands for verification.

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Terminal size as (width, height).
pub type TerminalSize = (u16, u16);

/// Source of input events.
pub trait EventStream: Send {
    /// True when an event is ready to be read within the timeout.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event. Only valid after `poll` returned true.
    fn read(&mut self) -> Result<Event>;
}

/// Sink for terminal rendering operations.
pub trait RenderStream: Write + Send {
    fn clear_screen(&mut self) -> Result<()>;

    /// Move the cursor to (column, row).
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    fn get_size(&self) -> Result<TerminalSize>;

    fn enter_alternate_screen(&mut self) -> Result<()>;

    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn enable_raw_mode(&mut self) -> Result<()>;

    fn disable_raw_mode(&mut self) -> Result<()>;
}
