//! Error taxonomy
//!
//! Catalog lookup failure is the only hard error in the system. Business
//! rule violations are not errors: they travel as `checkout::Issue` data.

use thiserror::Error;

/// Catalog access errors, surfaced by the boundary layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_not_found_display() {
        let err = CatalogError::EventNotFound {
            event_id: "arte-museum-ny".to_string(),
        };
        assert_eq!(err.to_string(), "Event not found: arte-museum-ny");
    }
}
