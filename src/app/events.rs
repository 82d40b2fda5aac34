//! # Application Events
//!
//! Event types that decouple the layers: `ApiEvent` carries network operation
//! outcomes from the service back to the single control thread, and `Focus`
//! names the input surface that currently receives keystrokes.

use crate::app::models::{Post, PostId};
use std::fmt;

/// Which of the four network operations an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    Load,
    Create,
    Update,
    Delete,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiOperation::Load => "load",
            ApiOperation::Create => "create",
            ApiOperation::Update => "update",
            ApiOperation::Delete => "delete",
        };
        write!(f, "{name}")
    }
}

/// Completion message for an in-flight network operation.
///
/// These are delivered over the service channel and applied to shared state in
/// arrival order, not invocation order. Overlapping operations are allowed;
/// nothing here serializes them.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    /// Full listing arrived; replaces the collection outright.
    CollectionLoaded { posts: Vec<Post> },

    /// The server echoed a created post (with its assigned id).
    PostCreated { post: Post },

    /// The server echoed the updated post.
    PostUpdated { post: Post },

    /// The delete for this id succeeded.
    PostDeleted { id: PostId },

    /// Any rejected call: transport error, non-2xx status, or an undecodable
    /// body. All failures land here undifferentiated; the policy is to log
    /// and apply nothing.
    RequestFailed {
        operation: ApiOperation,
        message: String,
    },
}

/// The input surface that currently owns keystrokes.
///
/// The edit fields only participate while a post is selected; the focus cycle
/// skips them otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    PostList,
    DraftTitle,
    DraftBody,
    EditTitle,
    EditBody,
}

impl Focus {
    /// Next surface in the Tab cycle.
    pub fn next(self, has_selection: bool) -> Focus {
        match self {
            Focus::PostList => Focus::DraftTitle,
            Focus::DraftTitle => Focus::DraftBody,
            Focus::DraftBody => {
                if has_selection {
                    Focus::EditTitle
                } else {
                    Focus::PostList
                }
            }
            Focus::EditTitle => Focus::EditBody,
            Focus::EditBody => Focus::PostList,
        }
    }

    /// True for the two create-form fields.
    pub fn is_draft_field(self) -> bool {
        matches!(self, Focus::DraftTitle | Focus::DraftBody)
    }

    /// True for the two edit-form fields.
    pub fn is_edit_field(self) -> bool {
        matches!(self, Focus::EditTitle | Focus::EditBody)
    }

    /// True for any text-input surface.
    pub fn is_text_field(self) -> bool {
        self.is_draft_field() || self.is_edit_field()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycle_skips_edit_fields_without_selection() {
        let mut focus = Focus::PostList;
        let mut seen = Vec::new();
        for _ in 0..3 {
            focus = focus.next(false);
            seen.push(focus);
        }
        assert_eq!(seen, vec![Focus::DraftTitle, Focus::DraftBody, Focus::PostList]);
    }

    #[test]
    fn focus_cycle_includes_edit_fields_with_selection() {
        let mut focus = Focus::DraftBody;
        focus = focus.next(true);
        assert_eq!(focus, Focus::EditTitle);
        focus = focus.next(true);
        assert_eq!(focus, Focus::EditBody);
        focus = focus.next(true);
        assert_eq!(focus, Focus::PostList);
    }

    #[test]
    fn operation_names_are_lowercase() {
        assert_eq!(ApiOperation::Load.to_string(), "load");
        assert_eq!(ApiOperation::Delete.to_string(), "delete");
    }
}
