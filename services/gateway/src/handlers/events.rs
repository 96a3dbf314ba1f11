use crate::error::AppError;
use crate::models::{AddOnListResponse, ServiceInfo, TicketListResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use catalog::errors::CatalogError;
use catalog::event::Event;

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Ticket Selector API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let event = resolve_event(&state, &event_id)?;
    Ok(Json(event))
}

pub async fn get_tickets(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<TicketListResponse>, AppError> {
    let event = resolve_event(&state, &event_id)?;
    Ok(Json(TicketListResponse {
        tickets: event.ticket_types,
    }))
}

pub async fn get_addons(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<AddOnListResponse>, AppError> {
    let event = resolve_event(&state, &event_id)?;
    Ok(Json(AddOnListResponse {
        addons: event.add_ons,
    }))
}

/// Look up an event in the catalog, mapping a miss to the 404 error.
pub(crate) fn resolve_event(state: &AppState, event_id: &str) -> Result<Event, AppError> {
    state
        .catalog
        .event(event_id)
        .cloned()
        .ok_or_else(|| {
            AppError::from(CatalogError::EventNotFound {
                event_id: event_id.to_string(),
            })
        })
}
