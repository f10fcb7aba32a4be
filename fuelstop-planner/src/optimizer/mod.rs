//! Greedy stop selection over tank-range windows.
//!
//! The optimizer is an explicit state machine. Each [`StopOptimizer::step`]
//! consumes an [`OptimizerState`] and returns the next state together with
//! the [`Transition`] that produced it:
//!
//! - [`Transition::Finish`]: the destination is within range. The last stop,
//!   if any, also loads the fuel for the final leg.
//! - [`Transition::Gap`]: no candidate lies in the current window. The last
//!   stop, if any, carries a full tank of extra fuel and the window advances
//!   by the tank range.
//! - [`Transition::Refuel`]: the candidate with the lowest distance-weighted
//!   price becomes a new stop.

use fuelstop_core::{
    CandidateStop, CoverageGap, PlanError, PlannedStop, RouteError, VehicleProfile,
};
use log::{debug, warn};
use rust_decimal::prelude::ToPrimitive;

/// Loop state carried between optimizer steps.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerState {
    /// Distance in miles the vehicle can still cover on its current load.
    pub current_range: f64,
    /// Route distance in miles already planned.
    pub total_distance: f64,
    /// Route position in miles of the last stop, or the origin.
    pub current_position: f64,
    /// Stops chosen so far, in route order.
    pub stops: Vec<PlannedStop>,
    /// Windows that had no reachable candidate.
    pub gaps: Vec<CoverageGap>,
}

/// Outcome of a single optimizer step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// The whole route was already planned; nothing changed.
    Arrived,
    /// The destination was within range.
    Finish {
        /// Distance in miles from the last stop to the destination.
        remaining_miles: f64,
        /// Whether the last stop was topped up for the final leg.
        topped_up: bool,
    },
    /// No candidate was reachable in the current window.
    Gap {
        /// Window start in miles.
        from_miles: f64,
        /// Window end in miles.
        to_miles: f64,
        /// Index of the stop that now carries fuel across the window.
        patched_stop: Option<usize>,
    },
    /// A new stop was appended.
    Refuel {
        /// Index of the new stop.
        stop_index: usize,
    },
}

impl Transition {
    /// Whether the optimizer is done after this transition.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Arrived | Self::Finish { .. })
    }
}

/// Greedy stop optimizer for one route.
///
/// # Examples
/// ```rust
/// use fuelstop_core::VehicleProfile;
/// use fuelstop_core::test_support::candidate;
/// use fuelstop_planner::StopOptimizer;
/// use rust_decimal::Decimal;
///
/// # fn main() -> Result<(), fuelstop_core::PlanError> {
/// let candidates = vec![candidate(1, 460.0, Decimal::new(350, 2))];
/// let outcome = StopOptimizer::new(600.0, &candidates, VehicleProfile::default())?.run()?;
///
/// let stop = outcome.stops.first().expect("one stop");
/// assert_eq!(stop.total_fuel, 60.0);
/// assert_eq!(stop.cost.to_string(), "210.00");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StopOptimizer<'a> {
    route_miles: f64,
    candidates: &'a [CandidateStop],
    tank_range_miles: f64,
    mpg: f64,
}

impl<'a> StopOptimizer<'a> {
    /// Prepare an optimizer for a route of `route_miles`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidRoute`] when `route_miles` is negative or
    /// not finite, and the [`VehicleProfile::validate`] errors for a tank
    /// range or fuel economy that is not finite and positive.
    pub fn new(
        route_miles: f64,
        candidates: &'a [CandidateStop],
        vehicle: VehicleProfile,
    ) -> Result<Self, PlanError> {
        if !route_miles.is_finite() || route_miles < 0.0 {
            return Err(RouteError::InvalidDistance { miles: route_miles }.into());
        }
        vehicle.validate()?;
        Ok(Self {
            route_miles,
            candidates,
            tank_range_miles: vehicle.tank_range_miles,
            mpg: vehicle.mpg,
        })
    }

    /// State before the first step: full tank at the origin.
    #[must_use]
    pub const fn initial_state(&self) -> OptimizerState {
        OptimizerState {
            current_range: self.tank_range_miles,
            total_distance: 0.0,
            current_position: 0.0,
            stops: Vec::new(),
            gaps: Vec::new(),
        }
    }

    /// Step from the origin until a terminal transition.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Cost`] when a stop's fuel cannot be priced.
    pub fn run(&self) -> Result<OptimizerState, PlanError> {
        self.resume(self.initial_state())
    }

    /// Step from `state` until a terminal transition.
    ///
    /// When a step fails to advance the plan, the rest of the route is
    /// recorded as an unpatched gap and the partial plan is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Cost`] when a stop's fuel cannot be priced.
    pub fn resume(&self, mut state: OptimizerState) -> Result<OptimizerState, PlanError> {
        loop {
            let progress = state.total_distance;
            let (next, transition) = self.step(state)?;
            state = next;
            if transition.is_terminal() {
                return Ok(state);
            }
            if state.total_distance <= progress {
                warn!(
                    "optimizer stalled at {progress} of {} mi; returning partial plan",
                    self.route_miles
                );
                record_gap(&mut state.gaps, progress, self.route_miles, None);
                return Ok(state);
            }
        }
    }

    /// Apply one transition to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Cost`] when a stop's fuel cannot be priced.
    #[expect(
        clippy::float_arithmetic,
        reason = "route windows and fuel quantities are floating-point miles"
    )]
    pub fn step(
        &self,
        mut state: OptimizerState,
    ) -> Result<(OptimizerState, Transition), PlanError> {
        if state.total_distance >= self.route_miles {
            return Ok((state, Transition::Arrived));
        }

        let remaining_miles = self.route_miles - state.total_distance;
        if remaining_miles <= state.current_range {
            let topped_up = match state.stops.last_mut() {
                Some(last) => {
                    last.finish_with(remaining_miles / self.mpg)?;
                    true
                }
                None => false,
            };
            return Ok((
                state,
                Transition::Finish {
                    remaining_miles,
                    topped_up,
                },
            ));
        }

        let Some(best) = self.best_reachable(&state) else {
            let transition = self.bridge_gap(&mut state)?;
            return Ok((state, transition));
        };

        let leg_miles = best.distance_from_start - state.current_position;
        debug!(
            "refuel at {:.1} mi: station {} after {leg_miles:.1} mi",
            best.distance_from_start, best.station.id
        );
        state
            .stops
            .push(PlannedStop::refuel(best.clone(), leg_miles / self.mpg)?);
        state.total_distance += leg_miles;
        state.current_position = best.distance_from_start;
        state.current_range = self.tank_range_miles;
        let stop_index = state.stops.len() - 1;
        Ok((state, Transition::Refuel { stop_index }))
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "gap windows are floating-point miles"
    )]
    fn bridge_gap(&self, state: &mut OptimizerState) -> Result<Transition, PlanError> {
        let from_miles = state.current_position;
        let to_miles = from_miles + self.tank_range_miles;
        let patched_stop = state.stops.len().checked_sub(1);
        if let Some(last) = state.stops.last_mut() {
            last.carry_across_gap(self.tank_range_miles / self.mpg)?;
        }
        warn!(
            "no station reachable between {from_miles:.1} and {to_miles:.1} mi; {}",
            patched_stop.map_or_else(
                || "no earlier stop to carry fuel".to_owned(),
                |index| format!("stop {index} carries the extra fuel"),
            )
        );
        record_gap(&mut state.gaps, from_miles, to_miles, patched_stop);

        state.total_distance += self.tank_range_miles;
        state.current_position += self.tank_range_miles;
        state.current_range = self.tank_range_miles;
        Ok(Transition::Gap {
            from_miles,
            to_miles,
            patched_stop,
        })
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the reachable window is measured in floating-point miles"
    )]
    fn best_reachable(&self, state: &OptimizerState) -> Option<&'a CandidateStop> {
        let position = state.current_position;
        let window_end = position + state.current_range;
        self.candidates
            .iter()
            .filter(|c| c.distance_from_start > position && c.distance_from_start <= window_end)
            .map(|c| (c, self.score(c, position)))
            // `min_by` keeps the first of several equal scores.
            .min_by(|(_, lhs), (_, rhs)| lhs.total_cmp(rhs))
            .map(|(c, _)| c)
    }

    /// Price weighted by how much of a tank it takes to reach the candidate.
    #[expect(
        clippy::float_arithmetic,
        reason = "the selection score blends price and distance in floating point"
    )]
    fn score(&self, candidate: &CandidateStop, position: f64) -> f64 {
        let price = candidate.retail_price().to_f64().unwrap_or(f64::MAX);
        price * (1.0 + (candidate.distance_from_start - position) / self.tank_range_miles)
    }
}

/// Plan stops for a route of `route_miles` from ordered `candidates`.
///
/// # Errors
///
/// Fails as [`StopOptimizer::new`] and [`StopOptimizer::run`] do.
///
/// # Examples
/// ```rust
/// use fuelstop_core::VehicleProfile;
/// use fuelstop_planner::optimize;
///
/// // Routes within one tank need no stop.
/// let stops = optimize(300.0, &[], VehicleProfile::default()).expect("valid vehicle");
/// assert!(stops.is_empty());
/// ```
pub fn optimize(
    route_miles: f64,
    candidates: &[CandidateStop],
    vehicle: VehicleProfile,
) -> Result<Vec<PlannedStop>, PlanError> {
    Ok(StopOptimizer::new(route_miles, candidates, vehicle)?.run()?.stops)
}

/// Append a gap, extending the previous one when the windows are adjacent
/// and patched by the same stop.
#[expect(
    clippy::float_cmp,
    reason = "adjacent windows share a boundary computed by the same addition"
)]
fn record_gap(
    gaps: &mut Vec<CoverageGap>,
    from_miles: f64,
    to_miles: f64,
    patched_stop: Option<usize>,
) {
    if let Some(last) = gaps.last_mut()
        && last.to_miles == from_miles
        && last.patched_stop == patched_stop
    {
        last.to_miles = to_miles;
        return;
    }
    gaps.push(CoverageGap {
        from_miles,
        to_miles,
        patched_stop,
    });
}
