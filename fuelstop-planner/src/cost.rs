//! Trip cost aggregation.

use fuelstop_core::{PlannedStop, quantize_cents};
use rust_decimal::Decimal;

/// Sum of the stop costs, quantized to cents.
///
/// An empty plan costs `0.00`.
///
/// # Examples
/// ```rust
/// use fuelstop_planner::total_cost;
///
/// assert_eq!(total_cost(&[]).to_string(), "0.00");
/// ```
#[must_use]
pub fn total_cost(stops: &[PlannedStop]) -> Decimal {
    let sum = stops
        .iter()
        .fold(Decimal::ZERO, |acc, stop| acc.saturating_add(stop.cost));
    quantize_cents(sum)
}
