use crate::error::AppError;
use crate::handlers::events::resolve_event;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use catalog::cart::Cart;
use catalog::checkout::CheckoutSummary;

/// Validate a proposed cart against an event and price it.
///
/// Malformed payloads (wrong shapes, negative quantities) are rejected by
/// the `Json` extractor before the engine runs. Business-rule violations
/// come back inside a 200 as `errors` on the summary.
pub async fn validate_cart(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(cart): Json<Cart>,
) -> Result<Json<CheckoutSummary>, AppError> {
    let event = resolve_event(&state, &event_id)?;
    let summary = checkout_engine::validate_and_price(&event, &cart);

    tracing::debug!(
        event_id = %event.id,
        valid = summary.valid,
        error_count = summary.errors.len(),
        "validated cart"
    );

    Ok(Json(summary))
}
