//! HTML rendering.
//!
//! All views are minijinja templates embedded at compile time and rendered
//! inside the shared `layout.html`. Handlers hand over a template name plus a
//! JSON data bag; the conventions (`title`, `errors`, per-view keys) are the
//! templates' contract.

use axum::{http::StatusCode, response::Html};
use minijinja::Environment;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};

static TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("error.html", include_str!("../templates/error.html")),
    ("genre_list.html", include_str!("../templates/genre_list.html")),
    ("genre_detail.html", include_str!("../templates/genre_detail.html")),
    ("genre_form.html", include_str!("../templates/genre_form.html")),
    ("genre_delete.html", include_str!("../templates/genre_delete.html")),
    (
        "bookinstance_list.html",
        include_str!("../templates/bookinstance_list.html"),
    ),
    (
        "bookinstance_detail.html",
        include_str!("../templates/bookinstance_detail.html"),
    ),
    (
        "bookinstance_form.html",
        include_str!("../templates/bookinstance_form.html"),
    ),
    (
        "bookinstance_delete.html",
        include_str!("../templates/bookinstance_delete.html"),
    ),
];

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)
            .expect("embedded template failed to parse");
    }
    env
});

/// Render a content template inside the shared layout
pub fn page(template: &str, data: &Value) -> AppResult<Html<String>> {
    let tmpl = ENV
        .get_template(template)
        .map_err(|e| AppError::Internal(format!("unknown template {}: {}", template, e)))?;
    let html = tmpl
        .render(data)
        .map_err(|e| AppError::Internal(format!("failed to render {}: {}", template, e)))?;
    Ok(Html(html))
}

/// Render the error page. Used by `AppError::into_response`, so it must not
/// itself produce an `AppError`.
pub fn error_page(status: StatusCode, message: &str) -> Result<Html<String>, minijinja::Error> {
    let html = ENV.get_template("error.html")?.render(json!({
        "title": "Error",
        "status": status.as_u16(),
        "message": message,
    }))?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_list_renders_names() {
        let html = page(
            "genre_list.html",
            &json!({
                "title": "Genre List",
                "genre_list": [
                    {"id": "3e0c3a3e-0000-0000-0000-000000000001", "name": "Fantasy"},
                    {"id": "3e0c3a3e-0000-0000-0000-000000000002", "name": "Poetry"},
                ],
            }),
        )
        .unwrap();
        assert!(html.0.contains("Fantasy"));
        assert!(html.0.contains("/genre/3e0c3a3e-0000-0000-0000-000000000002"));
    }

    #[test]
    fn genre_form_shows_errors_and_echoed_value() {
        let html = page(
            "genre_form.html",
            &json!({
                "title": "Create Genre",
                "genre": {"name": ""},
                "errors": [{"field": "name", "msg": "Genre name required"}],
            }),
        )
        .unwrap();
        assert!(html.0.contains("Genre name required"));
    }

    #[test]
    fn genre_form_without_errors_renders_empty_form() {
        let html = page("genre_form.html", &json!({"title": "Create Genre"})).unwrap();
        assert!(html.0.contains("<form"));
        assert!(!html.0.contains("class=\"errors\""));
    }

    #[test]
    fn bookinstance_form_marks_selected_book() {
        let html = page(
            "bookinstance_form.html",
            &json!({
                "title": "Update Book Instance",
                "book_list": [
                    {"id": "11111111-1111-1111-1111-111111111111", "title": "Dune"},
                    {"id": "22222222-2222-2222-2222-222222222222", "title": "Emma"},
                ],
                "selected_book": "22222222-2222-2222-2222-222222222222",
                "bookinstance": {"imprint": "Folio", "status": "Available", "due_back": ""},
            }),
        )
        .unwrap();
        let emma = html.0.find("22222222").unwrap();
        let selected = &html.0[..emma + 60];
        assert!(selected.contains("selected"));
    }

    #[test]
    fn error_page_carries_status_and_message() {
        let html = error_page(StatusCode::NOT_FOUND, "Genre not found").unwrap();
        assert!(html.0.contains("404"));
        assert!(html.0.contains("Genre not found"));
    }

    #[test]
    fn detail_renders_books_or_placeholder() {
        let html = page(
            "genre_detail.html",
            &json!({
                "title": "Genre Detail",
                "genre": {"id": "11111111-1111-1111-1111-111111111111", "name": "Essays"},
                "genre_books": [],
            }),
        )
        .unwrap();
        assert!(html.0.contains("Essays"));
        assert!(html.0.contains("no books"));
    }
}
