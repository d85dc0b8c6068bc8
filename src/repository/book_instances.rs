//! Book instances repository.
//!
//! Reads resolve the referenced book in the same query (an explicit join);
//! callers get a `BookInstanceDetail` aggregate or nothing, never a dangling
//! book reference.

use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::AppResult,
    forms::BookInstanceData,
    models::{Book, BookInstance, BookInstanceDetail},
};

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

fn detail_from_row(row: &sqlx::postgres::PgRow) -> BookInstanceDetail {
    BookInstanceDetail {
        id: row.get("id"),
        book: Book {
            id: row.get("book_id"),
            title: row.get("book_title"),
        },
        imprint: row.get("imprint"),
        status: row.get("status"),
        due_back: row.get("due_back"),
    }
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all book instances with their books resolved
    pub async fn list_with_book(&self) -> AppResult<Vec<BookInstanceDetail>> {
        let rows = sqlx::query(
            r#"
            SELECT bi.id, bi.imprint, bi.status, bi.due_back,
                   b.id AS book_id, b.title AS book_title
            FROM book_instances bi
            JOIN books b ON b.id = bi.book_id
            ORDER BY b.title ASC, bi.imprint ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(detail_from_row).collect())
    }

    /// Find a book instance by ID with its book resolved.
    ///
    /// Returns None when either the instance or its referenced book is
    /// missing.
    pub async fn find_by_id_with_book(&self, id: Uuid) -> AppResult<Option<BookInstanceDetail>> {
        let row = sqlx::query(
            r#"
            SELECT bi.id, bi.imprint, bi.status, bi.due_back,
                   b.id AS book_id, b.title AS book_title
            FROM book_instances bi
            JOIN books b ON b.id = bi.book_id
            WHERE bi.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(detail_from_row))
    }

    /// Insert a new book instance; the id is assigned here
    pub async fn create(&self, data: &BookInstanceData) -> AppResult<BookInstance> {
        let instance = sqlx::query_as::<_, BookInstance>(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, status, due_back)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.book_id)
        .bind(&data.imprint)
        .bind(&data.status)
        .bind(data.due_back)
        .fetch_one(&self.pool)
        .await?;
        Ok(instance)
    }

    /// Overwrite a book instance in place, same id
    pub async fn update(&self, id: Uuid, data: &BookInstanceData) -> AppResult<Option<BookInstance>> {
        let instance = sqlx::query_as::<_, BookInstance>(
            r#"
            UPDATE book_instances
            SET book_id = $1, imprint = $2, status = $3, due_back = $4
            WHERE id = $5
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(data.book_id)
        .bind(&data.imprint)
        .bind(&data.status)
        .bind(data.due_back)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(instance)
    }

    /// Delete a book instance by ID. Deleting an absent id is not an error.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
