//! Book instance business logic.
//!
//! Deletion is unconditional and idempotent: removing an id that is already
//! gone is a no-op. Reads always come back with the referenced book resolved.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    forms::BookInstanceData,
    models::{Book, BookInstance, BookInstanceDetail},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookInstancesService {
    repository: Repository,
}

impl BookInstancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All book instances with their books resolved
    pub async fn list(&self) -> AppResult<Vec<BookInstanceDetail>> {
        self.repository.book_instances.list_with_book().await
    }

    /// One book instance with its book resolved
    pub async fn detail(&self, id: Uuid) -> AppResult<BookInstanceDetail> {
        self.repository
            .book_instances
            .find_by_id_with_book(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book copy not found".to_string()))
    }

    /// Book list for the form's selection control
    pub async fn book_choices(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Persist a new book instance
    pub async fn create(&self, data: &BookInstanceData) -> AppResult<BookInstance> {
        let instance = self.repository.book_instances.create(data).await?;
        tracing::info!(instance_id = %instance.id, "book instance created");
        Ok(instance)
    }

    /// Fetch what the delete confirmation page needs; None when already gone
    pub async fn delete_preview(&self, id: Uuid) -> AppResult<Option<BookInstanceDetail>> {
        self.repository.book_instances.find_by_id_with_book(id).await
    }

    /// Delete by id, no existence check
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let removed = self.repository.book_instances.delete(id).await?;
        tracing::info!(instance_id = %id, removed, "book instance delete");
        Ok(())
    }

    /// Fetch the book choices and the instance for the pre-filled update form
    pub async fn update_preview(&self, id: Uuid) -> AppResult<(Vec<Book>, BookInstanceDetail)> {
        let (books, instance) = tokio::try_join!(
            self.repository.books.list(),
            self.repository.book_instances.find_by_id_with_book(id),
        )?;
        let instance =
            instance.ok_or_else(|| AppError::NotFound("Book copy not found".to_string()))?;
        Ok((books, instance))
    }

    /// Overwrite a book instance, keeping its id
    pub async fn update(&self, id: Uuid, data: &BookInstanceData) -> AppResult<BookInstance> {
        let instance = self
            .repository
            .book_instances
            .update(id, data)
            .await?
            .ok_or_else(|| AppError::NotFound("Book copy not found".to_string()))?;
        tracing::info!(instance_id = %instance.id, "book instance updated");
        Ok(instance)
    }
}
