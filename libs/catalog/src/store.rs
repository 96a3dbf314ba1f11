//! Read-only catalog store
//!
//! The checkout engine is written against `CatalogStore` rather than a
//! hardcoded catalog, so it can be exercised with arbitrary fixtures. The
//! store is built once at startup and never mutated; concurrent readers
//! need no locking.

use crate::event::Event;
use std::collections::HashMap;

/// Lookup-by-id over immutable event definitions. No mutation API.
pub trait CatalogStore: Send + Sync {
    /// Resolve an event by id. `None` means "not found"; mapping that to
    /// a client-visible response is the boundary layer's job.
    fn event(&self, event_id: &str) -> Option<&Event>;
}

/// In-memory catalog, keyed by event id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    events: HashMap<String, Event>,
}

impl InMemoryCatalog {
    /// Build a catalog from a set of event definitions.
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    /// Number of events in the catalog.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.get(event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::arte_museum;

    #[test]
    fn test_lookup_hit() {
        let store = InMemoryCatalog::new([arte_museum()]);
        let event = store.event("arte-museum-ny").unwrap();
        assert_eq!(event.venue, "Arte Museum New York");
    }

    #[test]
    fn test_lookup_miss() {
        let store = InMemoryCatalog::new([arte_museum()]);
        assert!(store.event("no-such-event").is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let store = InMemoryCatalog::default();
        assert!(store.is_empty());
        assert!(store.event("arte-museum-ny").is_none());
    }
}
