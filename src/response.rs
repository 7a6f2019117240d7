//! Success bodies for the item endpoints.

use crate::model::Item;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Created {
    pub id: i64,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct Message {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ItemList {
    pub count: usize,
    pub items: Vec<Item>,
}

pub fn created(id: i64) -> (StatusCode, Json<Created>) {
    (
        StatusCode::CREATED,
        Json(Created {
            id,
            message: "Item created successfully",
        }),
    )
}

pub fn message_ok(message: &'static str) -> (StatusCode, Json<Message>) {
    (StatusCode::OK, Json(Message { message }))
}

pub fn item_list(items: Vec<Item>) -> (StatusCode, Json<ItemList>) {
    let count = items.len();
    (StatusCode::OK, Json(ItemList { count, items }))
}
