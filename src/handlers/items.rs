//! Item CRUD handlers: create, list, read, update, delete.

use crate::error::{AppError, Operation, INVALID_ID};
use crate::extractors::ItemBody;
use crate::model::{ItemFilter, ItemPayload, NewItem};
use crate::repository::RequestValidator;
use crate::response::{created, item_list, message_ok};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::validation(INVALID_ID))
}

fn validate_payload(payload: &ItemPayload, op: Operation) -> Result<NewItem, AppError> {
    RequestValidator::payload(payload).map_err(|e| AppError::from_repo(op, e))
}

pub async fn create(
    State(state): State<AppState>,
    ItemBody(payload): ItemBody,
) -> Result<impl IntoResponse, AppError> {
    let item = validate_payload(&payload, Operation::Create)?;
    let id = state
        .items
        .create(&item.name, item.description.as_deref())
        .await
        .map_err(|e| AppError::from_repo(Operation::Create, e))?;
    tracing::info!(id, "item created");
    Ok(created(id))
}

pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ItemFilter::from_pairs(pairs);
    let items = state
        .items
        .list(&filter)
        .await
        .map_err(|e| AppError::from_repo(Operation::List, e))?;
    Ok(item_list(items))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let item = state
        .items
        .get_by_id(id)
        .await
        .map_err(|e| AppError::from_repo(Operation::Get, e))?;
    Ok(Json(item))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<ItemBody, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let ItemBody(payload) = body?;
    let item = validate_payload(&payload, Operation::Update)?;
    let changed = state
        .items
        .update(id, &item.name, item.description.as_deref())
        .await
        .map_err(|e| AppError::from_repo(Operation::Update, e))?;
    if changed == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "item updated");
    Ok(message_ok("Item updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let removed = state
        .items
        .delete(id)
        .await
        .map_err(|e| AppError::from_repo(Operation::Delete, e))?;
    if removed == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "item deleted");
    Ok(message_ok("Item deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-3").unwrap(), -3);
        for bad in ["abc", "1.5", "", " 7", "12abc", "99999999999999999999"] {
            let err = parse_id(bad).unwrap_err();
            assert_eq!(err.to_string(), INVALID_ID, "input {bad:?}");
        }
    }
}
