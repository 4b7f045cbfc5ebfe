pub mod form;
pub mod health;
pub mod order;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::error::OrderInputError;

/// Error returned by handlers. Input errors answer 400, anything else 500.
#[derive(Debug)]
pub enum ApiError {
    Input(OrderInputError),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Input(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = serde_json::to_string_pretty(&json!({ "Error message": message }))
            .unwrap_or_default();
        (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
    }
}

impl From<OrderInputError> for ApiError {
    fn from(err: OrderInputError) -> Self {
        ApiError::Input(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.into())
    }
}

/// Pretty-printed JSON body with `status`.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec_pretty(body)?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
