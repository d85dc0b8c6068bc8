//! Genre pages

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
    forms::{self, GenreForm},
    render,
    services::genres::{GenreCreateOutcome, GenreDeleteOutcome},
    AppState,
};

/// GET /genres
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let genres = state.services.genres.list().await?;
    render::page(
        "genre_list.html",
        &json!({
            "title": "Genre List",
            "genre_list": genres,
        }),
    )
}

/// GET /genre/:id
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Html<String>> {
    let (genre, books) = state.services.genres.detail(id).await?;
    render::page(
        "genre_detail.html",
        &json!({
            "title": "Genre Detail",
            "genre": genre,
            "genre_books": books,
        }),
    )
}

/// GET /genre/create
pub async fn create_form() -> AppResult<Html<String>> {
    render::page("genre_form.html", &json!({"title": "Create Genre"}))
}

/// POST /genre/create
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let data = match forms::validate_genre(&form) {
        Ok(data) => data,
        Err(invalid) => {
            let page = render::page(
                "genre_form.html",
                &json!({
                    "title": "Create Genre",
                    "genre": invalid.value,
                    "errors": invalid.errors,
                }),
            )?;
            return Ok(page.into_response());
        }
    };

    let genre = match state.services.genres.create(&data).await? {
        // Same name already catalogued: point at it instead of duplicating
        GenreCreateOutcome::Existing(genre) => genre,
        GenreCreateOutcome::Created(genre) => genre,
    };
    Ok(Redirect::to(&genre.url()).into_response())
}

/// GET /genre/:id/delete
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let Some((genre, books)) = state.services.genres.delete_preview(id).await? else {
        // Already gone: back to the list, not an error
        return Ok(Redirect::to("/genres").into_response());
    };
    let page = render::page(
        "genre_delete.html",
        &json!({
            "title": "Delete Genre",
            "genre": genre,
            "genre_books": books,
        }),
    )?;
    Ok(page.into_response())
}

#[derive(Deserialize)]
pub struct DeleteGenreForm {
    pub genreid: Uuid,
}

/// POST /genre/delete
///
/// The dependent-books check is re-run here against fresh reads; the state
/// shown on the confirmation form is not trusted.
pub async fn delete(
    State(state): State<AppState>,
    Form(form): Form<DeleteGenreForm>,
) -> AppResult<Response> {
    match state.services.genres.delete(form.genreid).await? {
        GenreDeleteOutcome::Blocked { genre, books } => {
            let page = render::page(
                "genre_delete.html",
                &json!({
                    "title": "Delete Genre",
                    "genre": genre,
                    "genre_books": books,
                }),
            )?;
            Ok(page.into_response())
        }
        GenreDeleteOutcome::Deleted => Ok(Redirect::to("/genres").into_response()),
    }
}

/// GET /genre/:id/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Html<String>> {
    let genre = state.services.genres.get(id).await?;
    render::page(
        "genre_form.html",
        &json!({
            "title": "Update Genre",
            "genre": genre,
        }),
    )
}

/// POST /genre/:id/update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let data = match forms::validate_genre(&form) {
        Ok(data) => data,
        Err(invalid) => {
            let page = render::page(
                "genre_form.html",
                &json!({
                    "title": "Update Genre",
                    "genre": invalid.value,
                    "errors": invalid.errors,
                }),
            )?;
            return Ok(page.into_response());
        }
    };

    let genre = state.services.genres.update(id, &data).await?;
    Ok(Redirect::to(&genre.url()).into_response())
}
