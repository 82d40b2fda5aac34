//! # Mock I/O Implementations
//!
//! Test doubles for `EventStream` and `RenderStream`: pre-programmed event
//! sequences in, recorded render commands and captured text out.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Event stream that serves a scripted sequence of events.
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted events left"))
    }
}

/// A render operation recorded by [`MockRenderStream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Flush,
}

type CommandHistory = Arc<Mutex<Vec<RenderCommand>>>;
type CapturedBytes = Arc<Mutex<Vec<u8>>>;

/// Render stream that records commands and captures written text.
///
/// The recording handles are `Arc`s so tests can keep a clone after the
/// stream has been moved into a renderer.
pub struct MockRenderStream {
    commands: CommandHistory,
    captured: CapturedBytes,
    size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            commands: Arc::new(Mutex::new(Vec::new())),
            captured: Arc::new(Mutex::new(Vec::new())),
            size,
        }
    }

    /// Handle onto the recorded command history.
    pub fn command_history(&self) -> CommandHistory {
        Arc::clone(&self.commands)
    }

    /// Handle onto the captured written bytes.
    pub fn capture_handle(&self) -> CapturedBytes {
        Arc::clone(&self.captured)
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn captured_text(&self) -> String {
        String::from_utf8_lossy(&self.captured.lock().unwrap()).into_owned()
    }

    fn record(&self, command: RenderCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.captured.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::ClearScreen);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.record(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::ShowCursor);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::EnterAlternateScreen);
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::LeaveAlternateScreen);
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableRawMode);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableRawMode);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn mock_event_stream_serves_events_in_order() {
        let a = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        let b = Event::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE));
        let mut stream = MockEventStream::new(vec![a.clone(), b.clone()]);

        assert!(stream.poll(Duration::from_millis(1)).unwrap());
        assert_eq!(stream.read().unwrap(), a);
        assert_eq!(stream.read().unwrap(), b);
        assert!(!stream.poll(Duration::from_millis(1)).unwrap());
    }

    #[test]
    fn mock_render_stream_records_commands_and_text() {
        let mut stream = MockRenderStream::new();
        let history = stream.command_history();

        stream.clear_screen().unwrap();
        stream.move_cursor(2, 3).unwrap();
        write!(stream, "hello").unwrap();

        assert_eq!(
            *history.lock().unwrap(),
            vec![RenderCommand::ClearScreen, RenderCommand::MoveCursor(2, 3)]
        );
        assert_eq!(stream.captured_text(), "hello");
    }
}
