//! Add-on requirement checks
//!
//! Walks the event's add-on catalog in order and collects every violated
//! rule. Checks never short-circuit: an add-on can fail both its ticket
//! requirement and its variant requirement at once, and later add-ons are
//! still checked after earlier failures.

use catalog::cart::Cart;
use catalog::checkout::{Issue, IssueKind};
use catalog::event::{AddOn, Event};

/// Collect all business-rule violations for a cart against an event.
///
/// Issues are emitted in catalog order (the event's add-on sequence), so
/// the error list is stable for a given (event, cart) pair.
///
/// Checks performed per selected add-on (quantity > 0):
/// 1. Ticket requirement: the required ticket type's cart quantity must
///    reach `min_required_tickets`
/// 2. Variant requirement: add-ons with variants need a variant id
pub fn collect_issues(event: &Event, cart: &Cart) -> Vec<Issue> {
    let mut issues = Vec::new();

    for addon in &event.add_ons {
        let selection = cart.addon_selection(&addon.id);
        let quantity = selection.map_or(0, |s| s.quantity);

        // Unselected add-ons are skipped entirely
        if quantity == 0 {
            continue;
        }

        if let Some(required_ticket) = &addon.requires_ticket_type {
            let have = cart.ticket_quantity(required_ticket);
            if have < addon.min_required_tickets {
                issues.push(unmet_ticket_requirement(event, addon, required_ticket));
            }
        }

        if addon.requires_variant() {
            let has_variant = selection.is_some_and(|s| s.variant_id.is_some());
            if !has_variant {
                issues.push(Issue::new(
                    IssueKind::MissingVariantSelection,
                    &addon.id,
                    format!("Please select a variant for {}.", addon.name),
                ));
            }
        }
    }

    issues
}

fn unmet_ticket_requirement(event: &Event, addon: &AddOn, required_ticket: &str) -> Issue {
    // Prefer the ticket type's display name; fall back to the raw id when
    // the catalog itself references an unknown ticket type.
    let ticket_name = event
        .ticket_type(required_ticket)
        .map_or(required_ticket, |t| t.name.as_str());

    Issue::new(
        IssueKind::UnmetTicketRequirement,
        &addon.id,
        format!(
            "To purchase the {} add-on, you need to select at least {} {} ticket. \
             Please adjust your selection to proceed.",
            addon.name, addon.min_required_tickets, ticket_name
        ),
    )
}
