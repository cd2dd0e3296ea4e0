use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::lending::command::active_loans_cmd::{ActiveLoansCommand, ActiveLoansCommandResponse};
use crate::lending::command::available_books_cmd::{AvailableBooksCommand, AvailableBooksCommandResponse};
use crate::lending::command::cancel_reservation_cmd::{CancelReservationCommand, CancelReservationCommandRequest, CancelReservationCommandResponse};
use crate::lending::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest, CheckoutBookCommandResponse};
use crate::lending::command::list_reservations_cmd::{ListReservationsCommand, ListReservationsCommandRequest, ListReservationsCommandResponse};
use crate::lending::command::reserve_book_cmd::{ReserveBookCommand, ReserveBookCommandRequest, ReserveBookCommandResponse};
use crate::lending::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};

pub(crate) async fn checkout_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CheckoutBookCommandResponse>, ServerError> {
    let req: CheckoutBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = CheckoutBookCommand::new(state.lending).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req: ReturnBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ReturnBookCommand::new(state.lending).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn active_loans(
    State(state): State<AppState>) -> Result<Json<ActiveLoansCommandResponse>, ServerError> {
    let res = ActiveLoansCommand::new(state.lending).execute(()).await?;
    Ok(Json(res))
}

pub(crate) async fn available_books(
    State(state): State<AppState>) -> Result<Json<AvailableBooksCommandResponse>, ServerError> {
    let res = AvailableBooksCommand::new(state.lending).execute(()).await?;
    Ok(Json(res))
}

pub(crate) async fn reserve_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReserveBookCommandResponse>, ServerError> {
    let req: ReserveBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ReserveBookCommand::new(state.lending).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn cancel_reservation(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CancelReservationCommandResponse>, ServerError> {
    let req: CancelReservationCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = CancelReservationCommand::new(state.lending).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn patron_reservations(
    State(state): State<AppState>,
    Path(patron_id): Path<String>) -> Result<Json<ListReservationsCommandResponse>, ServerError> {
    let req = ListReservationsCommandRequest { patron_id };
    let res = ListReservationsCommand::new(state.lending).execute(req).await?;
    Ok(Json(res))
}
