//! Local Library catalog server
//!
//! A server-rendered web application for the circulating side of a small
//! library catalog: genres and book instances (physical copies of books).
//! Every route maps a request to a database query and either an HTML render
//! or a redirect.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod pages;
pub mod render;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
