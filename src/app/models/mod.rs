//! # Models
//!
//! Pure data models without network or UI concerns.

pub mod collection;
pub mod post;

pub use collection::CollectionModel;
pub use post::{Draft, Post, PostId};
