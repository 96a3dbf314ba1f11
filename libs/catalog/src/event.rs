//! Immutable event catalog types
//!
//! An `Event` owns ordered sequences of ticket types and add-ons. All
//! definitions are read-only after construction; the catalog never
//! mutates once the store is built.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable ticket category within an event.
///
/// `min_quantity`/`max_quantity` are advertised to clients for display
/// purposes only; the checkout engine does not enforce them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    pub min_quantity: u32,
    pub max_quantity: u32,
}

/// A mutually exclusive sub-option of an add-on (size, edition, ...).
///
/// `price_modifier` is signed: negative modifiers discount the add-on's
/// base price. `available` is advertised, not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub name: String,
    pub price_modifier: Decimal,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// An optional purchasable item attached to an event.
///
/// A set `requires_ticket_type` conditions the add-on on a minimum number
/// of that ticket type in the cart. A present, non-empty `variants` list
/// makes variant selection mandatory at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_ticket_type: Option<String>,
    #[serde(default)]
    pub min_required_tickets: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
}

impl AddOn {
    /// Whether checkout must carry a variant selection for this add-on.
    pub fn requires_variant(&self) -> bool {
        self.variants.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// Look up one of this add-on's variants by id.
    pub fn variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants
            .as_deref()
            .and_then(|variants| variants.iter().find(|v| v.id == variant_id))
    }
}

/// An event definition: display metadata plus the ordered ticket-type and
/// add-on catalogs. Ids are unique within their containing collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub venue: String,
    pub image_url: String,
    pub ticket_types: Vec<TicketType>,
    pub add_ons: Vec<AddOn>,
}

impl Event {
    /// Look up a ticket type by id.
    pub fn ticket_type(&self, ticket_type_id: &str) -> Option<&TicketType> {
        self.ticket_types.iter().find(|t| t.id == ticket_type_id)
    }

    /// Look up an add-on by id.
    pub fn add_on(&self, addon_id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == addon_id)
    }
}
