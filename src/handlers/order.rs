use axum::{extract::State, http::StatusCode, response::Response};
use std::sync::Arc;

use super::form::OrderItems;
use super::{json_response, ApiError};
use crate::error::OrderInputError;
use crate::models::OrderResponse;
use crate::services::AppState;
use crate::validation::validate_items;

/// `POST /order`: packs for every submitted `items` value.
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    OrderItems(raw): OrderItems,
) -> Result<Response, ApiError> {
    let quantities = validate_items(&raw).inspect_err(log_rejection)?;

    let response = OrderResponse::from_quantities(&quantities, &state.calculator);
    for order in response.orders() {
        tracing::debug!(
            items = order.items,
            allocations = order.packs.len(),
            shipped = order.total_items(),
            "Order calculated"
        );
    }

    json_response(StatusCode::OK, &response)
}

fn log_rejection(err: &OrderInputError) {
    match err {
        OrderInputError::MalformedItems { value } => {
            tracing::warn!(value = %value, "Rejected order: malformed quantity")
        }
        OrderInputError::NegativeItems { value } => {
            tracing::warn!(value = *value, "Rejected order: negative quantity")
        }
        other => tracing::warn!(reason = %other, "Rejected order"),
    }
}
