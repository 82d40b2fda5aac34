//! # Command Mapping
//!
//! Translates raw key events into application commands. Keeping this mapping
//! separate from state mutation lets tests drive the view model with commands
//! directly and keeps key bindings in one place.

use crate::app::events::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A user intention, resolved from a key press and the current focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Exit the application.
    Quit,
    /// Re-fetch the full collection.
    Reload,
    /// Move focus to the next input surface.
    CycleFocus,
    /// Move the list highlight up one row.
    HighlightUp,
    /// Move the list highlight down one row.
    HighlightDown,
    /// Select the highlighted post for editing.
    SelectHighlighted,
    /// Submit the create form with the current draft.
    SubmitDraft,
    /// Submit the edit form for the current selection.
    SubmitUpdate,
    /// Delete the currently selected post.
    DeleteSelected,
    /// Type a character into the focused field.
    InsertChar(char),
    /// Delete the character before the end of the focused field.
    DeleteCharBack,
}

/// Resolve a key event against the current focus.
///
/// Returns `None` for keys with no binding in the given context.
pub fn command_for_key(key: KeyEvent, focus: Focus) -> Option<AppCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppCommand::Quit),
            KeyCode::Char('r') => Some(AppCommand::Reload),
            KeyCode::Char('d') => Some(AppCommand::DeleteSelected),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => Some(AppCommand::CycleFocus),
        KeyCode::Up if focus == Focus::PostList => Some(AppCommand::HighlightUp),
        KeyCode::Down if focus == Focus::PostList => Some(AppCommand::HighlightDown),
        KeyCode::Enter => match focus {
            Focus::PostList => Some(AppCommand::SelectHighlighted),
            f if f.is_draft_field() => Some(AppCommand::SubmitDraft),
            _ => Some(AppCommand::SubmitUpdate),
        },
        KeyCode::Backspace if focus.is_text_field() => Some(AppCommand::DeleteCharBack),
        KeyCode::Char(c) if focus.is_text_field() => Some(AppCommand::InsertChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_bindings_work_regardless_of_focus() {
        assert_eq!(command_for_key(ctrl('c'), Focus::PostList), Some(AppCommand::Quit));
        assert_eq!(command_for_key(ctrl('r'), Focus::DraftBody), Some(AppCommand::Reload));
        assert_eq!(
            command_for_key(ctrl('d'), Focus::EditTitle),
            Some(AppCommand::DeleteSelected)
        );
    }

    #[test]
    fn enter_depends_on_focus() {
        assert_eq!(
            command_for_key(key(KeyCode::Enter), Focus::PostList),
            Some(AppCommand::SelectHighlighted)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Enter), Focus::DraftTitle),
            Some(AppCommand::SubmitDraft)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Enter), Focus::EditBody),
            Some(AppCommand::SubmitUpdate)
        );
    }

    #[test]
    fn arrows_move_highlight_only_in_the_list() {
        assert_eq!(
            command_for_key(key(KeyCode::Up), Focus::PostList),
            Some(AppCommand::HighlightUp)
        );
        assert_eq!(command_for_key(key(KeyCode::Up), Focus::DraftTitle), None);
    }

    #[test]
    fn typing_goes_to_text_fields_only() {
        assert_eq!(
            command_for_key(key(KeyCode::Char('x')), Focus::EditBody),
            Some(AppCommand::InsertChar('x'))
        );
        assert_eq!(command_for_key(key(KeyCode::Char('x')), Focus::PostList), None);
        assert_eq!(
            command_for_key(key(KeyCode::Backspace), Focus::DraftTitle),
            Some(AppCommand::DeleteCharBack)
        );
        assert_eq!(command_for_key(key(KeyCode::Backspace), Focus::PostList), None);
    }
}
