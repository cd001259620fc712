use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::errors::ServiceError;
use service::items::{parse::parse_id, CreateItemInput, CreateOutcome, Item, UpdateItemInput};

use crate::errors::ApiError;
use crate::state::AppState;

// Bodies are taken as `Option<Json<_>>`: a missing or unparseable body reads
// as `{}` and is then rejected by the same presence checks as a body
// without `name`.

fn resolve_id(raw: &str) -> Result<i64, ApiError> {
    parse_id(raw).ok_or_else(|| ServiceError::item_not_found().into())
}

/// Create an item, or add to the count of the existing item with that name
pub async fn create_item(
    State(state): State<AppState>,
    body: Option<Json<CreateItemInput>>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let input = body.map(|Json(b)| b).unwrap_or_default();
    let (item, outcome) = state.items.create(input).await?;
    let status = match outcome {
        CreateOutcome::Created => StatusCode::CREATED,
        CreateOutcome::Incremented => StatusCode::OK,
    };
    Ok((status, Json(item)))
}

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items.list().await)
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = resolve_id(&id)?;
    Ok(Json(state.items.get(id).await?))
}

/// Rename an item; its count is left alone
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<UpdateItemInput>>,
) -> Result<Json<Item>, ApiError> {
    let id = resolve_id(&id)?;
    let input = body.map(|Json(b)| b).unwrap_or_default();
    Ok(Json(state.items.update(id, input).await?))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = resolve_id(&id)?;
    Ok(Json(state.items.delete(id).await?))
}
