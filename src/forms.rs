//! Form parsing and validation.
//!
//! Each mutating route runs its raw form body through a pure
//! `validate_*(input) -> Result<Sanitized, Invalid<Echo>>` function before
//! touching the database. Sanitization is trim, then a required check where
//! the field is mandatory, then markup escaping, then type coercion for
//! dates. Failures accumulate per field, in field order, and are rendered
//! back into the form as a normal 200 response together with the user's
//! sanitized input, so nothing typed is lost.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single failed field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub msg: &'static str,
}

/// A rejected form: the sanitized values to echo back plus the field errors
#[derive(Debug, Clone)]
pub struct Invalid<T> {
    pub value: T,
    pub errors: Vec<FieldError>,
}

/// Escape markup-significant characters, validator.js `escape()` table.
///
/// Escaped values are what gets stored; the templates display them verbatim.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// Raw genre form body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreForm {
    #[serde(default)]
    pub name: String,
}

/// Sanitized genre fields, ready to persist
#[derive(Debug, Clone, Serialize)]
pub struct GenreData {
    pub name: String,
}

/// Validate and sanitize the genre name field
pub fn validate_genre(input: &GenreForm) -> Result<GenreData, Invalid<GenreData>> {
    let mut errors = Vec::new();

    let name = input.name.trim();
    if name.is_empty() {
        errors.push(FieldError {
            field: "name",
            msg: "Genre name required",
        });
    }
    let name = escape(name);

    let data = GenreData { name };
    if errors.is_empty() {
        Ok(data)
    } else {
        Err(Invalid {
            value: data,
            errors,
        })
    }
}

// ---------------------------------------------------------------------------
// BookInstance
// ---------------------------------------------------------------------------

/// Raw book instance form body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookInstanceForm {
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub imprint: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub due_back: String,
}

/// Sanitized book instance fields, ready to persist
#[derive(Debug, Clone)]
pub struct BookInstanceData {
    pub book_id: Uuid,
    pub imprint: String,
    pub status: String,
    pub due_back: Option<NaiveDate>,
}

/// Sanitized string form of a rejected book instance, echoed into the form
#[derive(Debug, Clone, Serialize)]
pub struct BookInstanceEcho {
    pub book: String,
    pub imprint: String,
    pub status: String,
    pub due_back: String,
}

/// Validate and sanitize all book instance fields.
///
/// `book` and `imprint` are required; `status` is escaped only; `due_back`
/// is optional and skipped entirely when empty after trimming.
pub fn validate_book_instance(
    input: &BookInstanceForm,
) -> Result<BookInstanceData, Invalid<BookInstanceEcho>> {
    let mut errors = Vec::new();

    let book = input.book.trim();
    let book_id = book.parse::<Uuid>().ok();
    if book.is_empty() || book_id.is_none() {
        errors.push(FieldError {
            field: "book",
            msg: "Book must be specified",
        });
    }
    let book = escape(book);

    let imprint = input.imprint.trim();
    if imprint.is_empty() {
        errors.push(FieldError {
            field: "imprint",
            msg: "Imprint must be specified",
        });
    }
    let imprint = escape(imprint);

    let status = escape(&input.status);

    let due_back_raw = input.due_back.trim();
    let due_back = if due_back_raw.is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(due_back_raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError {
                    field: "due_back",
                    msg: "Invalid date",
                });
                None
            }
        }
    };

    if errors.is_empty() {
        // book_id is Some here, the required check above rejected None
        Ok(BookInstanceData {
            book_id: book_id.unwrap_or_default(),
            imprint,
            status,
            due_back,
        })
    } else {
        Err(Invalid {
            value: BookInstanceEcho {
                book,
                imprint,
                status,
                due_back: escape(due_back_raw),
            },
            errors,
        })
    }
}
