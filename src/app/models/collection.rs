//! # Collection Model
//!
//! The in-memory ordered list of known posts. Insertion order is whatever the
//! remote listing returned, with newly created posts appended at the end.

use super::post::{Post, PostId};

/// Ordered collection of posts, keyed by server-assigned id.
#[derive(Debug, Clone, Default)]
pub struct CollectionModel {
    posts: Vec<Post>,
}

impl CollectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    /// Replace the whole collection with a fresh listing, in the order given.
    pub fn replace_all(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Append a newly created post at the end.
    pub fn append(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Replace the entry whose id matches `post.id` with `post`.
    /// Returns false when no entry matched.
    pub fn replace_by_id(&mut self, post: Post) -> bool {
        match self.posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => {
                *existing = post;
                true
            }
            None => false,
        }
    }

    /// Remove every entry with the given id, preserving the relative order of
    /// the rest. Returns the number of entries removed (expected at most one).
    pub fn remove_by_id(&mut self, id: PostId) -> usize {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        before - self.posts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: PostId) -> Post {
        Post::new(id, format!("title {id}"), format!("body {id}"))
    }

    #[test]
    fn replace_all_keeps_listing_order() {
        let mut collection = CollectionModel::new();
        collection.append(sample(99));

        collection.replace_all(vec![sample(3), sample(1), sample(2)]);

        let ids: Vec<PostId> = collection.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn append_adds_at_the_end() {
        let mut collection = CollectionModel::new();
        collection.replace_all(vec![sample(1), sample(2)]);

        collection.append(sample(101));

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.get(2).unwrap().id, 101);
    }

    #[test]
    fn replace_by_id_swaps_only_the_matching_entry() {
        let mut collection = CollectionModel::new();
        collection.replace_all(vec![sample(1), sample(2), sample(3)]);

        let replaced = collection.replace_by_id(Post::new(2, "edited", "text"));

        assert!(replaced);
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.get(1).unwrap().title, "edited");
        assert_eq!(collection.get(0).unwrap().title, "title 1");
    }

    #[test]
    fn replace_by_id_without_match_changes_nothing() {
        let mut collection = CollectionModel::new();
        collection.replace_all(vec![sample(1)]);

        assert!(!collection.replace_by_id(sample(42)));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0).unwrap().title, "title 1");
    }

    #[test]
    fn remove_by_id_keeps_relative_order() {
        let mut collection = CollectionModel::new();
        collection.replace_all(vec![sample(1), sample(2), sample(3)]);

        let removed = collection.remove_by_id(2);

        assert_eq!(removed, 1);
        let ids: Vec<PostId> = collection.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_by_id_with_unknown_id_is_a_noop() {
        let mut collection = CollectionModel::new();
        collection.replace_all(vec![sample(1), sample(2)]);

        assert_eq!(collection.remove_by_id(9), 0);
        assert_eq!(collection.len(), 2);
    }
}
