//! Book endpoints
//!
//! Path ids and JSON bodies are decoded here rather than through axum's
//! `Path<i64>` / `Json<T>` rejections, so every failure is rendered with
//! the same envelope.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::{Book, BookPayload},
    AppState,
};

use super::response::ApiResponse;

fn invalid_id() -> AppError {
    AppError::BadRequest("Invalid book ID".to_string())
}

fn invalid_body() -> AppError {
    AppError::BadRequest("Invalid request body".to_string())
}

fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| invalid_id())
}

/// Segments that are not valid UTF-8 are rejected by axum before we see them.
fn path_id(path: Result<Path<String>, PathRejection>) -> AppResult<i64> {
    let Path(raw) = path.map_err(|_| invalid_id())?;
    parse_id(&raw)
}

/// Only a JSON object is a book; arrays would otherwise decode positionally.
fn parse_payload(body: &[u8]) -> AppResult<BookPayload> {
    match serde_json::from_slice::<Value>(body).map_err(|_| invalid_body())? {
        Value::Object(fields) => {
            serde_json::from_value(Value::Object(fields)).map_err(|_| invalid_body())
        }
        _ => Err(invalid_body()),
    }
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, in the `data` member of the envelope", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<ApiResponse<Vec<Book>>> {
    let books = state.services.books.list();
    Json(ApiResponse::success("Books retrieved successfully", books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details, in the `data` member of the envelope", body = Book),
        (status = 400, description = "Invalid book ID", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let id = path_id(id)?;
    let book = state.services.books.get_by_id(id)?;
    Ok(Json(ApiResponse::success("Book retrieved successfully", book)))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created, with its assigned id", body = Book),
        (status = 400, description = "Malformed body or validation error", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<ApiResponse<Book>>)> {
    let data = parse_payload(&body)?;
    let book = state.services.books.create(data)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Book created successfully", book)),
    ))
}

/// Replace a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid id, malformed body or validation error", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> AppResult<Json<ApiResponse<Book>>> {
    let id = path_id(id)?;
    let data = parse_payload(&body)?;
    let book = state.services.books.update(id, data)?;
    Ok(Json(ApiResponse::success("Book updated successfully", book)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 400, description = "Invalid book ID", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = path_id(id)?;
    state.services.books.delete(id)?;
    Ok(Json(ApiResponse::message("Book deleted successfully")))
}
