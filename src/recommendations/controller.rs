use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};
use crate::recommendations::command::recommend_books_cmd::{RecommendBooksCommand, RecommendBooksCommandRequest, RecommendBooksCommandResponse};

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendParams {
    limit: Option<i64>,
}

pub(crate) async fn recommend_books(
    State(state): State<AppState>,
    Path(patron_id): Path<String>,
    Query(params): Query<RecommendParams>) -> Result<Json<RecommendBooksCommandResponse>, ServerError> {
    let req = RecommendBooksCommandRequest::new(patron_id.as_str(), params.limit);
    let res = RecommendBooksCommand::new(state.recommendations, state.config.default_recommendations)
        .execute(req).await?;
    Ok(Json(res))
}
