//! # Postline - Terminal Post Manager
//!
//! A small terminal client that lists, creates, updates, and deletes posts
//! against a REST resource collection.
//!
//! ## Architecture
//!
//! The application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐   renders    ┌──────────────┐   ApiEvents   ┌─────────────┐
//! │    View     │◄─────────────│  ViewModel   │◄──────────────│ PostService │
//! │             │              │              │    (mpsc)     │             │
//! │ - Terminal  │              │ - Collection │               │ - reqwest   │
//! │ - Rendering │              │ - Draft      │               │ - 4 ops     │
//! └─────────────┘              │ - Selection  │               └─────────────┘
//!                              └──────────────┘
//!                                      ▲
//!                                      │ AppCommands
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │ - Key input  │
//!                               │ - Event loop │
//!                               └──────────────┘
//! ```
//!
//! All state lives in the [`app::ViewModel`] and is mutated only on the
//! control thread; network operations complete through a channel and are
//! applied in arrival order.

pub mod app;
pub mod cmd_args;
pub mod config;
pub mod profile;

// Re-export main types for easy access
pub use app::*;
