//! HTML page handlers.
//!
//! Every handler turns a request into a database call and then either a
//! rendered page or a redirect. Mutating routes run form validation first;
//! the invalid branch is a normal 200 re-render of the form, never an error
//! status.

pub mod book_instances;
pub mod genres;

use axum::{response::Redirect, Json};
use serde_json::{json, Value};

/// Home page: the catalog entry point is the genre list
pub async fn home() -> Redirect {
    Redirect::to("/genres")
}

/// Liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
