//! Cart pricing
//!
//! Subtotals are exact Decimal sums; rounding happens once, on the final
//! total, in `engine`. Pricing is computed even for invalid carts: the
//! summary reports a total alongside validity and the caller decides what
//! to do with an invalid cart's total.

use catalog::cart::Cart;
use catalog::event::{AddOn, Event};
use rust_decimal::Decimal;

/// Sum of `unit price x quantity` over the event's ticket types.
///
/// Cart entries that do not resolve against the catalog contribute
/// nothing.
pub fn ticket_subtotal(event: &Event, cart: &Cart) -> Decimal {
    event
        .ticket_types
        .iter()
        .map(|ticket| ticket.price * Decimal::from(cart.ticket_quantity(&ticket.id)))
        .sum()
}

/// Sum of effective add-on prices times quantities.
///
/// The effective unit price is the add-on's base price plus the selected
/// variant's modifier when the variant id resolves. An unresolved or
/// absent variant id simply contributes no modifier; flagging it is the
/// validator's job, not pricing's.
pub fn addon_subtotal(event: &Event, cart: &Cart) -> Decimal {
    event
        .add_ons
        .iter()
        .filter_map(|addon| {
            let selection = cart.addon_selection(&addon.id)?;
            if selection.quantity == 0 {
                return None;
            }
            let unit = effective_unit_price(addon, selection.variant_id.as_deref());
            Some(unit * Decimal::from(selection.quantity))
        })
        .sum()
}

/// Base price plus the resolved variant's modifier, if any.
///
/// The result is not floor-clamped: a variant discount larger than the
/// base price yields a negative effective price.
fn effective_unit_price(addon: &AddOn, variant_id: Option<&str>) -> Decimal {
    let modifier = variant_id
        .and_then(|id| addon.variant(id))
        .map_or(Decimal::ZERO, |v| v.price_modifier);
    addon.price + modifier
}
