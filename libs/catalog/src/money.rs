//! Monetary rounding policy
//!
//! All money flows through `rust_decimal` for deterministic arithmetic.
//! Totals are rounded once, at the very end of pricing; per-line amounts
//! are never rounded.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places carried by a final monetary total.
pub const MONEY_DP: u32 = 2;

/// Round a final total to 2 decimal places using banker's rounding
/// (round-half-even). This is the single rounding point in the system.
pub fn round_total(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_total_passthrough() {
        let amount = Decimal::from_str_exact("80.80").unwrap();
        assert_eq!(round_total(amount), amount);
    }

    #[test]
    fn test_round_total_half_even() {
        // Midpoints round to the even neighbour
        assert_eq!(
            round_total(Decimal::from_str_exact("1.005").unwrap()),
            Decimal::from_str_exact("1.00").unwrap()
        );
        assert_eq!(
            round_total(Decimal::from_str_exact("1.015").unwrap()),
            Decimal::from_str_exact("1.02").unwrap()
        );
    }

    #[test]
    fn test_round_total_negative() {
        // Negative totals (discount-heavy carts) round by the same rule
        assert_eq!(
            round_total(Decimal::from_str_exact("-2.505").unwrap()),
            Decimal::from_str_exact("-2.50").unwrap()
        );
    }
}
