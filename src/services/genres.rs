//! Genre business logic.
//!
//! Creation is idempotent by name: asking for a genre that already exists
//! points the caller at the existing one instead of creating a duplicate.
//! Deletion is refused while any book still references the genre; the check
//! runs against fresh reads at delete time, not against whatever the
//! confirmation form showed. It is best effort, not transactional: a book
//! gaining the genre between check and delete is an accepted race.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    forms::GenreData,
    models::{Book, Genre},
    repository::Repository,
};

/// Result of a create request
pub enum GenreCreateOutcome {
    /// A genre with this exact name already existed; no row was written
    Existing(Genre),
    Created(Genre),
}

/// Result of a delete request
pub enum GenreDeleteOutcome {
    /// Books still reference the genre; nothing was deleted
    Blocked { genre: Genre, books: Vec<Book> },
    Deleted,
}

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All genres, name ascending
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    /// A genre together with the books that reference it
    pub async fn detail(&self, id: Uuid) -> AppResult<(Genre, Vec<Book>)> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres.find_by_id(id),
            self.repository.books.list_by_genre(id),
        )?;
        let genre = genre.ok_or_else(|| AppError::NotFound("Genre not found".to_string()))?;
        Ok((genre, books))
    }

    /// Create a genre, or return the existing one with the same name
    pub async fn create(&self, data: &GenreData) -> AppResult<GenreCreateOutcome> {
        if let Some(found) = self.repository.genres.find_by_name(&data.name).await? {
            return Ok(GenreCreateOutcome::Existing(found));
        }
        let genre = self.repository.genres.create(&data.name).await?;
        tracing::info!(genre_id = %genre.id, "genre created");
        Ok(GenreCreateOutcome::Created(genre))
    }

    /// Fetch what the delete confirmation page needs.
    ///
    /// Returns None when the genre no longer exists; the caller redirects to
    /// the list rather than treating that as an error.
    pub async fn delete_preview(&self, id: Uuid) -> AppResult<Option<(Genre, Vec<Book>)>> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres.find_by_id(id),
            self.repository.books.list_by_genre(id),
        )?;
        Ok(genre.map(|g| (g, books)))
    }

    /// Delete a genre unless books still reference it
    pub async fn delete(&self, id: Uuid) -> AppResult<GenreDeleteOutcome> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres.find_by_id(id),
            self.repository.books.list_by_genre(id),
        )?;
        if let Some(genre) = genre {
            if !books.is_empty() {
                return Ok(GenreDeleteOutcome::Blocked { genre, books });
            }
        }
        // Absent genre falls through: deleting an already-deleted id is a
        // no-op, not an error
        self.repository.genres.delete(id).await?;
        tracing::info!(genre_id = %id, "genre deleted");
        Ok(GenreDeleteOutcome::Deleted)
    }

    /// Fetch a genre for the pre-filled update form
    pub async fn get(&self, id: Uuid) -> AppResult<Genre> {
        self.repository
            .genres
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))
    }

    /// Overwrite a genre's name, keeping its id
    pub async fn update(&self, id: Uuid, data: &GenreData) -> AppResult<Genre> {
        let genre = self
            .repository
            .genres
            .update_name(id, &data.name)
            .await?
            .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))?;
        tracing::info!(genre_id = %genre.id, "genre updated");
        Ok(genre)
    }
}
