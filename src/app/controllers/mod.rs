//! # Controllers
//!
//! Event-loop orchestration.

pub mod app_controller;

pub use app_controller::AppController;
