//! Shared helpers for currency arithmetic.

use rust_decimal::Decimal;

/// Rounds to two decimal places, half-up (away from zero). Standard
/// financial rounding for dollars-and-cents amounts.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole dollar, half-up (away from zero). The
/// rebate's eligible amount is stated in whole dollars.
pub fn round_whole_dollar(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Floors a value at zero. Negative intermediate amounts clamp rather
/// than error.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}
