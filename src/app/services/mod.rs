//! # Services
//!
//! Network-facing service layer.

pub mod posts;

pub use posts::PostService;
