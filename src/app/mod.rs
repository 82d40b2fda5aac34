//! # MVVM Application
//!
//! The post manager proper: models hold the data, the view model owns all
//! mutable state, views render it, the service runs the network operations,
//! and the controller drives the single-threaded event loop.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use events::{ApiEvent, ApiOperation, Focus};
pub use models::{CollectionModel, Draft, Post, PostId};
pub use services::PostService;
pub use view_models::ViewModel;
pub use views::{TerminalRenderer, ViewRenderer};
