use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};
use lambda_http::Body;
use serde_json::Value;
use crate::books::dto::BookRequest;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::purge_book_cmd::{PurgeBookCommand, PurgeBookCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

// the body type matches what lambda_http::run hands to the router
pub fn routes(state: AppState) -> Router<(), Body> {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/search", get(search_books))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .route("/books/:id/hard", delete(purge_book))
        .with_state(state)
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn search_books(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksCommandRequest>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let res = SearchBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let book: BookRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(AddBookCommandRequest::new(book)).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    json: Json<Value>) -> Result<StatusCode, ServerError> {
    let book: BookRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let _ = UpdateBookCommand::new(state.catalog).execute(UpdateBookCommandRequest::new(book_id, book)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let _ = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn purge_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<StatusCode, ServerError> {
    let req = PurgeBookCommandRequest { book_id };
    let _ = PurgeBookCommand::new(state.catalog).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}
