//! Rounding used by every pricing stage.
//!
//! Amounts are rounded away from zero to three fractional digits so a quote
//! never comes out below the exact figure.

use rust_decimal::{Decimal, RoundingStrategy};

pub const SCALE: u32 = 3;

/// Round away from zero to [`SCALE`] fractional digits.
pub fn ceil3(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE, RoundingStrategy::AwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_up_partial_thousandths() {
        assert_eq!(ceil3(dec!(6.0240963)), dec!(6.025));
        assert_eq!(ceil3(dec!(6024.0963855)), dec!(6024.097));
    }

    #[test]
    fn test_exact_values_unchanged() {
        assert_eq!(ceil3(dec!(675)), dec!(675));
        assert_eq!(ceil3(dec!(1.250)), dec!(1.25));
    }

    #[test]
    fn test_negative_rounds_away_from_zero() {
        assert_eq!(ceil3(dec!(-0.0001)), dec!(-0.001));
    }

    #[test]
    fn test_half_does_not_round_to_even() {
        assert_eq!(ceil3(dec!(0.0005)), dec!(0.001));
        assert_eq!(ceil3(dec!(0.0025)), dec!(0.003));
    }
}
