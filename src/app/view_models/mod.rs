//! # View Model
//!
//! The single owner of all mutable UI state: the collection, the draft, the
//! selection, the list highlight, and the focus. Every mutation happens here,
//! on the control thread, either from a user command or from an `ApiEvent`
//! drained off the service channel.

use crate::app::events::{ApiEvent, Focus};
use crate::app::models::{CollectionModel, Draft, Post};

/// Application state plus the small amount of presentation state the terminal
/// view needs (highlight row, focus, a label for the status line).
pub struct ViewModel {
    collection: CollectionModel,
    draft: Draft,
    selection: Option<Post>,
    focus: Focus,
    highlight: usize,
    api_label: String,
    dirty: bool,
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            collection: CollectionModel::new(),
            draft: Draft::new(),
            selection: None,
            focus: Focus::PostList,
            highlight: 0,
            api_label: String::new(),
            dirty: true,
        }
    }

    pub fn collection(&self) -> &CollectionModel {
        &self.collection
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn selection(&self) -> Option<&Post> {
        self.selection.as_ref()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    pub fn api_label(&self) -> &str {
        &self.api_label
    }

    /// Label shown in the status line (profile name and base URL).
    pub fn set_api_label(&mut self, label: impl Into<String>) {
        self.api_label = label.into();
        self.dirty = true;
    }

    /// Whether the view needs re-rendering; reading resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Apply a completed network outcome, in arrival order.
    ///
    /// Failures change nothing: the error goes to the log and the state the
    /// operation would have touched stays exactly as it was.
    pub fn apply_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::CollectionLoaded { posts } => {
                tracing::debug!("Loaded {} posts", posts.len());
                self.collection.replace_all(posts);
                self.clamp_highlight();
                self.dirty = true;
            }
            ApiEvent::PostCreated { post } => {
                tracing::debug!("Created post {}", post.id);
                self.collection.append(post);
                self.draft.reset();
                self.dirty = true;
            }
            ApiEvent::PostUpdated { post } => {
                tracing::debug!("Updated post {}", post.id);
                self.collection.replace_by_id(post);
                self.selection = None;
                if self.focus.is_edit_field() {
                    self.focus = Focus::PostList;
                }
                self.dirty = true;
            }
            ApiEvent::PostDeleted { id } => {
                tracing::debug!("Deleted post {id}");
                self.collection.remove_by_id(id);
                self.clamp_highlight();
                // The selection keeps showing the removed post until another
                // row is chosen; delete has never dismissed the edit form.
                self.dirty = true;
            }
            ApiEvent::RequestFailed { operation, message } => {
                tracing::error!("{operation} request failed: {message}");
            }
        }
    }

    /// Set the selection to a value copy of the given post.
    pub fn select(&mut self, post: Post) {
        self.selection = Some(post);
        self.focus = Focus::EditTitle;
        self.dirty = true;
    }

    /// Select the post under the list highlight, if any. Re-selecting
    /// discards unsaved edits to the previous selection without confirmation.
    pub fn select_highlighted(&mut self) {
        if let Some(post) = self.collection.get(self.highlight).cloned() {
            self.select(post);
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next(self.selection.is_some());
        self.dirty = true;
    }

    pub fn highlight_up(&mut self) {
        if self.highlight > 0 {
            self.highlight -= 1;
            self.dirty = true;
        }
    }

    pub fn highlight_down(&mut self) {
        if self.highlight + 1 < self.collection.len() {
            self.highlight += 1;
            self.dirty = true;
        }
    }

    /// Type a character into whichever field has focus.
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_field_mut() {
            field.push(c);
            self.dirty = true;
        }
    }

    /// Remove the last character of the focused field.
    pub fn delete_char_back(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.pop();
            self.dirty = true;
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::DraftTitle => Some(&mut self.draft.title),
            Focus::DraftBody => Some(&mut self.draft.body),
            Focus::EditTitle => self.selection.as_mut().map(|p| &mut p.title),
            Focus::EditBody => self.selection.as_mut().map(|p| &mut p.body),
            Focus::PostList => None,
        }
    }

    fn clamp_highlight(&mut self) {
        let last = self.collection.len().saturating_sub(1);
        if self.highlight > last {
            self.highlight = last;
        }
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
