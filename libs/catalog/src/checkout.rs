//! Checkout validation results
//!
//! Business-rule violations are returned as data, never thrown: the engine
//! collects every issue so the storefront can show all of them at once.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of business-rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    /// Add-on selected without the ticket quantity it requires
    UnmetTicketRequirement,
    /// Add-on with mandatory variants selected without a variant
    MissingVariantSelection,
}

/// A structured validation failure bound to one add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    #[serde(rename = "addonId")]
    pub addon_id: String,
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, addon_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            addon_id: addon_id.into(),
            message: message.into(),
        }
    }
}

/// Result of validating and pricing a cart.
///
/// `total` is always computed, even for invalid carts; callers decide
/// whether to act on an invalid cart's total. `warnings` is reserved for
/// future soft checks and is always empty under the current rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub valid: bool,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_wire_shape() {
        let issue = Issue::new(
            IssueKind::MissingVariantSelection,
            "tshirt",
            "Please select a variant for Event T-Shirt.",
        );

        let json: serde_json::Value = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["kind"], "MISSING_VARIANT_SELECTION");
        assert_eq!(json["addonId"], "tshirt");
        assert!(json["message"].as_str().unwrap().contains("T-Shirt"));
    }

    #[test]
    fn test_summary_total_is_json_number() {
        let summary = CheckoutSummary {
            valid: true,
            errors: vec![],
            warnings: vec![],
            total: Decimal::from_str_exact("80.80").unwrap(),
        };

        let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["valid"], true);
        assert!(json["total"].is_number());
        assert!(json["errors"].as_array().unwrap().is_empty());
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }
}
