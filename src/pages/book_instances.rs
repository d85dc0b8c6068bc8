//! Book instance (copy) pages

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::AppResult,
    forms::{self, BookInstanceForm},
    render, AppState,
};

/// GET /bookinstances
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let instances = state.services.book_instances.list().await?;
    render::page(
        "bookinstance_list.html",
        &json!({
            "title": "Book Instance List",
            "bookinstance_list": instances,
        }),
    )
}

/// GET /bookinstance/:id
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Html<String>> {
    let instance = state.services.book_instances.detail(id).await?;
    render::page(
        "bookinstance_detail.html",
        &json!({
            "title": format!("Copy: {}", instance.book.title),
            "bookinstance": instance,
        }),
    )
}

/// GET /bookinstance/create
pub async fn create_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.book_instances.book_choices().await?;
    render::page(
        "bookinstance_form.html",
        &json!({
            "title": "Create BookInstance",
            "book_list": books,
        }),
    )
}

/// POST /bookinstance/create
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    let data = match forms::validate_book_instance(&form) {
        Ok(data) => data,
        Err(invalid) => {
            // Re-render with the book list refetched and the user's choice kept
            let books = state.services.book_instances.book_choices().await?;
            let page = render::page(
                "bookinstance_form.html",
                &json!({
                    "title": "Create BookInstance",
                    "book_list": books,
                    "selected_book": invalid.value.book.clone(),
                    "bookinstance": invalid.value,
                    "errors": invalid.errors,
                }),
            )?;
            return Ok(page.into_response());
        }
    };

    let instance = state.services.book_instances.create(&data).await?;
    Ok(Redirect::to(&instance.url()).into_response())
}

/// GET /bookinstance/:id/delete
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let Some(instance) = state.services.book_instances.delete_preview(id).await? else {
        // Already gone: back to the list, not an error
        return Ok(Redirect::to("/bookinstances").into_response());
    };
    let page = render::page(
        "bookinstance_delete.html",
        &json!({
            "title": "Delete Book Instance",
            "bookinstance": instance,
        }),
    )?;
    Ok(page.into_response())
}

#[derive(Deserialize)]
pub struct DeleteBookInstanceForm {
    pub bookinstanceid: Uuid,
}

/// POST /bookinstance/delete
///
/// No existence check: deleting an id that is already gone still redirects
/// to the list.
pub async fn delete(
    State(state): State<AppState>,
    Form(form): Form<DeleteBookInstanceForm>,
) -> AppResult<Response> {
    state
        .services
        .book_instances
        .delete(form.bookinstanceid)
        .await?;
    Ok(Redirect::to("/bookinstances").into_response())
}

/// GET /bookinstance/:id/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Html<String>> {
    let (books, instance) = state.services.book_instances.update_preview(id).await?;
    render::page(
        "bookinstance_form.html",
        &json!({
            "title": "Update Book Instance",
            "book_list": books,
            "selected_book": instance.book.id,
            "bookinstance": instance,
        }),
    )
}

/// POST /bookinstance/:id/update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    let data = match forms::validate_book_instance(&form) {
        Ok(data) => data,
        Err(invalid) => {
            let books = state.services.book_instances.book_choices().await?;
            let page = render::page(
                "bookinstance_form.html",
                &json!({
                    "title": "Update Book Instance",
                    "book_list": books,
                    "selected_book": invalid.value.book.clone(),
                    "bookinstance": invalid.value,
                    "errors": invalid.errors,
                }),
            )?;
            return Ok(page.into_response());
        }
    };

    let instance = state.services.book_instances.update(id, &data).await?;
    Ok(Redirect::to(&instance.url()).into_response())
}
