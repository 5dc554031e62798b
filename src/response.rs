//! Response helpers shared by the resource handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{"message": "..."}` body returned by delete.
#[derive(Serialize, Debug, PartialEq)]
pub struct GenericMessage {
    pub message: String,
}

pub fn message(text: impl Into<String>) -> (StatusCode, Json<GenericMessage>) {
    (
        StatusCode::OK,
        Json(GenericMessage {
            message: text.into(),
        }),
    )
}

pub fn deleted_message(entity: &str, id: impl std::fmt::Display) -> (StatusCode, Json<GenericMessage>) {
    message(format!("{} with id {} deleted", entity, id))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
