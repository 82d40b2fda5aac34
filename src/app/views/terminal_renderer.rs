//! # Terminal Renderer
//!
//! Draws the whole screen as a function of the view model: post list, create
//! form, conditional edit form, status line. No state of its own beyond the
//! terminal size; every render starts from a cleared screen.

use crate::app::events::Focus;
use crate::app::io::{RenderStream, TerminalSize};
use crate::app::view_models::ViewModel;
use anyhow::Result;

const STATUS_HINTS: &str = "Enter:select/submit  Tab:focus  ^R:reload  ^D:delete  ^C:quit";

/// Rendering contract the controller drives.
pub trait ViewRenderer {
    /// Set up the terminal (raw mode, alternate screen, cursor).
    fn initialize(&mut self) -> Result<()>;

    /// Redraw everything from the current view model state.
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Restore the terminal.
    fn cleanup(&mut self) -> Result<()>;
}

/// Renderer over an abstract `RenderStream`.
pub struct TerminalRenderer<RS: RenderStream> {
    stream: RS,
    size: TerminalSize,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(stream: RS) -> Result<Self> {
        let size = stream.get_size()?;
        Ok(Self { stream, size })
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.size
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.size = (width, height);
    }

    fn line(&mut self, row: u16, text: &str) -> Result<()> {
        let width = self.size.0 as usize;
        self.stream.move_cursor(0, row)?;
        let truncated: String = text.chars().take(width).collect();
        write!(self.stream, "{truncated}")?;
        Ok(())
    }

    /// Rows available for the post list given the surrounding chrome.
    fn list_height(&self, has_selection: bool) -> usize {
        let chrome = if has_selection { 11 } else { 7 };
        (self.size.1 as usize).saturating_sub(chrome).max(1)
    }

    fn render_list(&mut self, view_model: &ViewModel, first_row: u16) -> Result<u16> {
        let visible = self.list_height(view_model.selection().is_some());
        let highlight = view_model.highlight();
        let start = if highlight < visible {
            0
        } else {
            highlight - visible + 1
        };

        let selected_id = view_model.selection().map(|p| p.id);
        let mut row = first_row;
        for (index, post) in view_model
            .collection()
            .posts()
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
        {
            let cursor = if index == highlight && view_model.focus() == Focus::PostList {
                '>'
            } else {
                ' '
            };
            let selected = if selected_id == Some(post.id) { '*' } else { ' ' };
            self.line(row, &format!("{cursor}{selected}{:>4}  {}", post.id, post.title))?;
            row += 1;
        }
        if view_model.collection().is_empty() {
            self.line(row, "  (no posts)")?;
            row += 1;
        }
        Ok(row)
    }

    fn render_field(&mut self, row: u16, label: &str, value: &str, focused: bool) -> Result<()> {
        let marker = if focused { '>' } else { ' ' };
        self.line(row, &format!("{marker} {label} {value}"))
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.stream.enable_raw_mode()?;
        self.stream.enter_alternate_screen()?;
        self.stream.hide_cursor()?;
        self.stream.clear_screen()?;
        self.stream.flush()?;
        Ok(())
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        self.stream.clear_screen()?;

        self.line(0, &format!(" postline | {} posts", view_model.collection().len()))?;

        let mut row = self.render_list(view_model, 2)?;
        row += 1;

        let focus = view_model.focus();
        self.line(row, " New Post")?;
        self.render_field(
            row + 1,
            "Title:",
            &view_model.draft().title,
            focus == Focus::DraftTitle,
        )?;
        self.render_field(
            row + 2,
            "Body: ",
            &view_model.draft().body,
            focus == Focus::DraftBody,
        )?;
        row += 4;

        if let Some(selected) = view_model.selection() {
            self.line(row, &format!(" Edit Post {}", selected.id))?;
            self.render_field(row + 1, "Title:", &selected.title, focus == Focus::EditTitle)?;
            self.render_field(row + 2, "Body: ", &selected.body, focus == Focus::EditBody)?;
        }

        let status_row = self.size.1.saturating_sub(1);
        self.line(
            status_row,
            &format!("{STATUS_HINTS}  |  {}", view_model.api_label()),
        )?;

        self.stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.stream.show_cursor()?;
        self.stream.leave_alternate_screen()?;
        self.stream.disable_raw_mode()?;
        self.stream.flush()?;
        Ok(())
    }
}
