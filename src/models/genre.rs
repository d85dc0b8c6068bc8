//! Genre model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named book category.
///
/// The name is stored already sanitized (trimmed and markup-escaped) by the
/// form validation pipeline; it is never empty.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}

impl Genre {
    /// Canonical detail-page URL for this genre
    pub fn url(&self) -> String {
        format!("/genre/{}", self.id)
    }
}
