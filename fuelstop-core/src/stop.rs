//! Candidate and planned refuelling stops.

use rust_decimal::Decimal;

use crate::FuelStation;
use crate::money::{CostError, fuel_cost};

/// A station found near the route, tagged with where along the route it lies.
///
/// The same station may appear several times when it is the cheapest option
/// at more than one checkpoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateStop {
    /// The station itself.
    pub station: FuelStation,
    /// Cumulative route distance in miles at which the station is reached.
    pub distance_from_start: f64,
}

impl CandidateStop {
    /// Pair a station with its distance from the route origin.
    #[must_use]
    pub const fn new(station: FuelStation, distance_from_start: f64) -> Self {
        Self {
            station,
            distance_from_start,
        }
    }

    /// Retail price of the underlying station.
    #[must_use]
    pub const fn retail_price(&self) -> Decimal {
        self.station.retail_price
    }
}

/// A stop chosen by a planner, with the fuel loaded there and its cost.
///
/// `fuel_needed` is the fuel required to reach this stop from the previous
/// one (or from the origin). `total_fuel` is what the driver actually buys:
/// it grows when the stop has to cover a stretch without stations or the
/// final leg to the destination.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rust_decimal::Decimal;
/// use fuelstop_core::{CandidateStop, FuelStation, PlannedStop};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let station = FuelStation::new(1, "Pilot", Coord { x: 0.0, y: 0.0 }, Decimal::new(350, 2))?;
/// let mut stop = PlannedStop::refuel(CandidateStop::new(station, 460.0), 46.0)?;
/// assert_eq!(stop.cost, Decimal::new(16100, 2));
///
/// stop.finish_with(14.0)?;
/// assert_eq!(stop.total_fuel, 60.0);
/// assert_eq!(stop.cost, Decimal::new(21000, 2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedStop {
    /// Station where fuel is bought.
    pub station: FuelStation,
    /// Cumulative route distance in miles at which the stop lies.
    pub distance_from_start: f64,
    /// Fuel needed to reach this stop, plus any fuel carried across gaps.
    pub fuel_needed: f64,
    /// Fuel bought here for the final leg to the destination.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub fuel_for_finish: Option<f64>,
    /// Fuel bought at this stop.
    pub total_fuel: f64,
    /// `total_fuel` times the station price, rounded to cents.
    pub cost: Decimal,
}

impl PlannedStop {
    /// Create a stop that loads `fuel_needed` units at `candidate`.
    pub fn refuel(candidate: CandidateStop, fuel_needed: f64) -> Result<Self, CostError> {
        let CandidateStop {
            station,
            distance_from_start,
        } = candidate;
        let cost = fuel_cost(fuel_needed, station.retail_price)?;
        Ok(Self {
            station,
            distance_from_start,
            fuel_needed,
            fuel_for_finish: None,
            total_fuel: fuel_needed,
            cost,
        })
    }

    /// Also load the fuel for the final leg to the destination.
    ///
    /// The stop is left unchanged when the new total cannot be priced.
    pub fn finish_with(&mut self, fuel_for_finish: f64) -> Result<(), CostError> {
        let total_fuel = self.fuel_needed + fuel_for_finish;
        self.cost = fuel_cost(total_fuel, self.station.retail_price)?;
        self.fuel_for_finish = Some(fuel_for_finish);
        self.total_fuel = total_fuel;
        Ok(())
    }

    /// Also load `extra_fuel` to cross a stretch with no reachable station.
    ///
    /// The stop is left unchanged when the new total cannot be priced.
    pub fn carry_across_gap(&mut self, extra_fuel: f64) -> Result<(), CostError> {
        let fuel_needed = self.fuel_needed + extra_fuel;
        self.cost = fuel_cost(fuel_needed, self.station.retail_price)?;
        self.fuel_needed = fuel_needed;
        self.total_fuel = fuel_needed;
        Ok(())
    }
}

/// A stretch of the route where no candidate station was within range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageGap {
    /// Route position in miles where the stretch starts.
    pub from_miles: f64,
    /// Route position in miles where the stretch ends.
    pub to_miles: f64,
    /// Index of the stop that carries extra fuel across the stretch, if any.
    pub patched_stop: Option<usize>,
}

impl CoverageGap {
    /// Whether an earlier stop was topped up to cover this stretch.
    #[must_use]
    pub const fn is_patched(&self) -> bool {
        self.patched_stop.is_some()
    }
}

/// The outcome of planning fuel stops for one route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    /// Total route distance in miles.
    pub distance_miles: f64,
    /// Stops in route order.
    pub stops: Vec<PlannedStop>,
    /// Stretches without a reachable station.
    pub gaps: Vec<CoverageGap>,
    /// Sum of stop costs, rounded to cents.
    pub total_cost: Decimal,
    /// Set when the plan relies on carrying fuel across coverage gaps, or
    /// skipped a gap it could not patch.
    pub soft_infeasible: bool,
}

impl Plan {
    /// Assemble a plan; the soft-infeasible marker follows from `gaps`.
    #[must_use]
    pub fn new(
        distance_miles: f64,
        stops: Vec<PlannedStop>,
        gaps: Vec<CoverageGap>,
        total_cost: Decimal,
    ) -> Self {
        let soft_infeasible = !gaps.is_empty();
        Self {
            distance_miles,
            stops,
            gaps,
            total_cost,
            soft_infeasible,
        }
    }

    /// Total fuel bought across all stops.
    #[must_use]
    pub fn total_fuel(&self) -> f64 {
        self.stops.iter().map(|stop| stop.total_fuel).sum()
    }
}
