//! Lenient item body: anything that is not a JSON request reads as an empty payload.

use crate::error::{AppError, INVALID_BODY};
use crate::model::ItemPayload;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
};

/// Body of `POST /items` and `PUT /items/:id`.
///
/// A missing or non-JSON content type, or an empty body, yields `ItemPayload::default()`,
/// so the request fails name validation instead of body parsing.
#[derive(Debug, Clone)]
pub struct ItemBody(pub ItemPayload);

fn is_json_request(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence.to_ascii_lowercase().ends_with("+json")
}

fn bytes_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        tracing::debug!(reason = %rejection.body_text(), "failed to read request body");
        AppError::validation(INVALID_BODY)
    }
}

#[async_trait]
impl<S> FromRequest<S> for ItemBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json_request(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(bytes_rejection)?;
        if !json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ItemBody(ItemPayload::default()));
        }
        serde_json::from_slice(&bytes).map(ItemBody).map_err(|e| {
            tracing::debug!(error = %e, "rejected request body");
            AppError::validation(INVALID_BODY)
        })
    }
}
