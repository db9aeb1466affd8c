use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ProjectionError, ProjectionResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ProjectionResult<f64> {
    value.to_f64().ok_or_else(|| {
        ProjectionError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Rounds a decimal month count to the nearest whole month, halves away from zero.
///
/// Values below zero saturate to `0` and values beyond `u32::MAX` saturate to
/// `u32::MAX`, so range validation still reports them.
#[must_use]
pub fn decimal_to_months(value: Decimal) -> u32 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() {
        return 0;
    }
    rounded.to_u32().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{decimal_to_f64, decimal_to_months};

    #[test]
    fn decimal_amounts_convert_exactly_enough() {
        let value = decimal_to_f64(Decimal::new(123_45, 2), "amount").expect("convert");
        assert!((value - 123.45).abs() <= 1e-12);
    }

    #[test]
    fn month_counts_round_and_saturate() {
        assert_eq!(decimal_to_months(Decimal::new(245, 1)), 25);
        assert_eq!(decimal_to_months(Decimal::new(-3, 0)), 0);
        assert_eq!(decimal_to_months(Decimal::new(12, 0)), 12);
    }
}
