//! The validate-and-price operation
//!
//! Composes the requirement checks and the pricing pass into the single
//! public operation of this service.

use catalog::cart::Cart;
use catalog::checkout::CheckoutSummary;
use catalog::event::Event;
use catalog::money::round_total;

use crate::pricing;
use crate::validator;

/// Validate a cart against an event's business rules and price it.
///
/// Pure function: no side effects, deterministic for a given input pair,
/// and total over any well-typed cart (unknown ids normalize to zero
/// selection). The event must already be resolved; "event not found" is
/// the caller's concern.
///
/// The total is computed unconditionally, with a single banker's rounding
/// to 2 decimal places at the end. `valid` is simply "no errors";
/// `warnings` is reserved for future soft checks.
pub fn validate_and_price(event: &Event, cart: &Cart) -> CheckoutSummary {
    let errors = validator::collect_issues(event, cart);
    let subtotal = pricing::ticket_subtotal(event, cart) + pricing::addon_subtotal(event, cart);
    let total = round_total(subtotal);

    CheckoutSummary {
        valid: errors.is_empty(),
        errors,
        warnings: Vec::new(),
        total,
    }
}
