//! Transient cart payload
//!
//! The cart is client-supplied input, never persisted. Quantities are
//! `u32`, so the "non-negative integers" precondition is enforced by
//! deserialization before the engine ever sees the cart. Ids that do not
//! resolve against the event catalog are treated as zero selection, not
//! as errors.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One add-on selection: requested quantity plus an optional variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnSelection {
    pub quantity: u32,
    #[serde(
        rename = "variantId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub variant_id: Option<String>,
}

/// Proposed cart: ticket-type id -> quantity, add-on id -> selection.
///
/// Ids absent from either map imply quantity 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub tickets: HashMap<String, u32>,
    #[serde(default)]
    pub addons: HashMap<String, AddOnSelection>,
}

impl Cart {
    /// Requested quantity for a ticket type (missing entry -> 0).
    pub fn ticket_quantity(&self, ticket_type_id: &str) -> u32 {
        self.tickets.get(ticket_type_id).copied().unwrap_or(0)
    }

    /// Selection record for an add-on, if any.
    pub fn addon_selection(&self, addon_id: &str) -> Option<&AddOnSelection> {
        self.addons.get(addon_id)
    }

    /// Requested quantity for an add-on (missing entry -> 0).
    pub fn addon_quantity(&self, addon_id: &str) -> u32 {
        self.addon_selection(addon_id).map_or(0, |s| s.quantity)
    }
}
