//! Rounding of the final total.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the nearest whole currency unit, halves away from zero.
///
/// # Example
///
/// ```
/// use enrollment_pricing::calculation::round_to_currency_unit;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_currency_unit(Decimal::new(10625, 1)), Decimal::new(1063, 0));
/// assert_eq!(round_to_currency_unit(Decimal::new(10624, 1)), Decimal::new(1062, 0));
/// ```
pub fn round_to_currency_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
