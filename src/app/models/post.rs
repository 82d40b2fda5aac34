//! # Post Models
//!
//! Wire-level data for the remote posts collection: the `Post` entity as the
//! server returns it, and the `Draft` payload for not-yet-created posts.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote service. Opaque to this client beyond
/// equality checks.
pub type PostId = u64;

/// A post as known to the remote collection.
///
/// Responses may carry additional fields (e.g. `userId` on the demo API);
/// only these three are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: PostId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The new-post form state. Has no id until the server assigns one; the
/// created entity comes back in the POST response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both fields, as done after a successful create.
    pub fn reset(&mut self) {
        self.title.clear();
        self.body.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_ignoring_unknown_fields() {
        let json = r#"{"userId": 1, "id": 7, "title": "hello", "body": "world"}"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "hello");
        assert_eq!(post.body, "world");
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = Draft {
            title: "A".to_string(),
            body: "B".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json, serde_json::json!({"title": "A", "body": "B"}));
    }

    #[test]
    fn draft_reset_clears_both_fields() {
        let mut draft = Draft {
            title: "half-typed".to_string(),
            body: "text".to_string(),
        };
        draft.reset();

        assert!(draft.title.is_empty());
        assert!(draft.body.is_empty());
    }

    #[test]
    fn empty_draft_is_still_serializable() {
        // No client-side validation: empty fields are submitted as-is.
        let json = serde_json::to_value(Draft::new()).unwrap();
        assert_eq!(json, serde_json::json!({"title": "", "body": ""}));
    }
}
