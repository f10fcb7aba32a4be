//! Fixed-precision cost arithmetic.
//!
//! Fuel quantities are floating point miles-per-gallon derivations, but costs
//! are money: every multiplication happens in [`Decimal`] and every result is
//! quantized to cents with banker's rounding.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of fractional digits carried by every monetary value.
pub const CENT_SCALE: u32 = 2;

/// Errors returned by [`fuel_cost`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostError {
    /// The fuel quantity was negative, not finite, or too large for a decimal.
    #[error("fuel quantity {fuel} cannot be priced")]
    InvalidFuel {
        /// Quantity as supplied.
        fuel: f64,
    },
}

/// Round `value` to exactly two fractional digits.
///
/// Midpoints round to the nearest even digit, so `0.125` becomes `0.12`.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use fuelstop_core::quantize_cents;
///
/// let cost = quantize_cents(Decimal::new(210, 0));
/// assert_eq!(cost.to_string(), "210.00");
/// ```
#[must_use]
pub fn quantize_cents(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(CENT_SCALE);
    rounded
}

/// Cost of `fuel` units at `price` per unit, quantized to cents.
///
/// Negative and non-finite quantities are rejected rather than priced.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use fuelstop_core::fuel_cost;
///
/// # fn main() -> Result<(), fuelstop_core::CostError> {
/// let cost = fuel_cost(60.0, Decimal::new(350, 2))?;
/// assert_eq!(cost, Decimal::new(21000, 2));
/// assert!(fuel_cost(f64::INFINITY, Decimal::ONE).is_err());
/// # Ok(())
/// # }
/// ```
pub fn fuel_cost(fuel: f64, price: Decimal) -> Result<Decimal, CostError> {
    let units = fuel_to_decimal(fuel).ok_or(CostError::InvalidFuel { fuel })?;
    Ok(quantize_cents(units.saturating_mul(price)))
}

/// Convert a fuel quantity to a decimal through its shortest textual form.
///
/// `46.0` becomes exactly `46`, and `12.345` exactly `12.345`, instead of the
/// nearest binary fraction.
fn fuel_to_decimal(fuel: f64) -> Option<Decimal> {
    if !fuel.is_finite() || fuel < 0.0 {
        return None;
    }
    if fuel == 0.0 {
        // Covers -0.0, which would otherwise print as "-0".
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(&fuel.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(fuel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // 12.345 x 3.999 = 49.367655, so 49.37 is the correctly rounded cost.
    #[case(12.345, Decimal::new(3999, 3), Decimal::new(4937, 2))]
    #[case(46.0, Decimal::new(350, 2), Decimal::new(16100, 2))]
    #[case(0.1, Decimal::new(3, 1), Decimal::new(3, 2))]
    fn cost_is_exact_decimal_product(
        #[case] fuel: f64,
        #[case] price: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(fuel_cost(fuel, price), Ok(expected));
    }

    #[rstest]
    fn float_noise_does_not_leak_into_cost() {
        // 0.1 + 0.2 is 0.30000000000000004 in binary floating point.
        let fuel = 0.1 + 0.2;
        assert_eq!(
            fuel_cost(fuel, Decimal::new(100, 0)),
            Ok(Decimal::new(3000, 2))
        );
    }

    #[rstest]
    #[case(Decimal::new(125, 3), "0.12")]
    #[case(Decimal::new(135, 3), "0.14")]
    #[case(Decimal::new(5, 0), "5.00")]
    fn quantize_uses_bankers_rounding_and_two_digits(
        #[case] value: Decimal,
        #[case] expected: &str,
    ) {
        assert_eq!(quantize_cents(value).to_string(), expected);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(-60.0)]
    #[case(f64::MAX)]
    fn unpriceable_fuel_is_rejected(#[case] fuel: f64) {
        let err = fuel_cost(fuel, Decimal::new(350, 2)).expect_err("fuel should be rejected");
        assert!(matches!(err, CostError::InvalidFuel { .. }));
    }

    #[rstest]
    fn negative_zero_fuel_costs_zero() {
        let cost = fuel_cost(-0.0, Decimal::new(350, 2)).expect("zero fuel is priceable");
        assert_eq!(cost.to_string(), "0.00");
    }
}
