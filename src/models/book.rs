//! Book model (read-only reference data)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog title. Books are managed elsewhere; this layer only reads their
/// id and title, for genre membership and for the copy selection control.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
}
