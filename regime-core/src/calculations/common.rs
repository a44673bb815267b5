//! Small numeric helpers shared by the tax calculations and their callers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places, midpoints away from zero.
///
/// Calculations never call this; it is for rendering amounts in paise.
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(37500.125)), dec!(37500.13));
/// assert_eq!(round_half_up(dec!(37500.124)), dec!(37500.12));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Floors a computed amount at zero. The value is otherwise left exact.
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
