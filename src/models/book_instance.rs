//! Book instance (physical copy) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::book::Book;

/// A circulating copy of a book, as stored.
///
/// `status` is free text from the form (escaped, not constrained to a fixed
/// set); `due_back` is only present for copies that are out.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: Uuid,
    pub book_id: Uuid,
    pub imprint: String,
    pub status: String,
    pub due_back: Option<NaiveDate>,
}

impl BookInstance {
    /// Canonical detail-page URL for this copy
    pub fn url(&self) -> String {
        format!("/bookinstance/{}", self.id)
    }
}

/// A book instance with its referenced book resolved.
///
/// Built by the repository from a join; readers never see a dangling
/// `book_id`, a missing book surfaces as NotFound instead.
#[derive(Debug, Clone, Serialize)]
pub struct BookInstanceDetail {
    pub id: Uuid,
    pub book: Book,
    pub imprint: String,
    pub status: String,
    pub due_back: Option<NaiveDate>,
}

impl BookInstanceDetail {
    pub fn url(&self) -> String {
        format!("/bookinstance/{}", self.id)
    }
}
