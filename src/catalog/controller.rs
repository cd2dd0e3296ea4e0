use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(isbn);
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.isbn = isbn;
    let res = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest::new(isbn);
    let res = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn search_books(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksCommandRequest>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let res = SearchBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}
