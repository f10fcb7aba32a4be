//! Route sampling and station lookup.
//!
//! The locator walks the route polyline, accumulating geodesic distance. When
//! the distance since the previous checkpoint comes within
//! `checkpoint_margin_miles` of the tank range, the current route point
//! becomes a checkpoint and the cheapest station within
//! `search_radius_miles` of it is emitted as a candidate.

use fuelstop_core::{CandidateStop, FuelStation, PlanError, geodesic_miles};
use geo::Coord;
use log::debug;

/// Default lateral search radius around a checkpoint, in miles.
pub const DEFAULT_SEARCH_RADIUS_MILES: f64 = 30.0;

/// Default distance before an empty tank at which checkpoints fire, in miles.
pub const DEFAULT_CHECKPOINT_MARGIN_MILES: f64 = 50.0;

/// Parameters for [`locate_candidates`].
///
/// # Examples
/// ```rust
/// use fuelstop_planner::LocatorSettings;
///
/// let settings = LocatorSettings::for_tank_range(500.0);
/// assert_eq!(settings.search_radius_miles, 30.0);
/// assert_eq!(settings.checkpoint_margin_miles, 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatorSettings {
    /// Distance in miles a full tank sustains.
    pub tank_range_miles: f64,
    /// Maximum distance between a checkpoint and a station, in miles.
    pub search_radius_miles: f64,
    /// How far before the tank range a checkpoint fires, in miles.
    pub checkpoint_margin_miles: f64,
}

impl LocatorSettings {
    /// Settings for `tank_range_miles` with the default radius and margin.
    #[must_use]
    pub const fn for_tank_range(tank_range_miles: f64) -> Self {
        Self {
            tank_range_miles,
            search_radius_miles: DEFAULT_SEARCH_RADIUS_MILES,
            checkpoint_margin_miles: DEFAULT_CHECKPOINT_MARGIN_MILES,
        }
    }

    /// Check for a finite positive tank range and a finite non-negative
    /// radius and margin.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !(self.tank_range_miles.is_finite() && self.tank_range_miles > 0.0) {
            return Err(PlanError::InvalidTankRange {
                miles: self.tank_range_miles,
            });
        }
        if !is_non_negative(self.search_radius_miles) {
            return Err(PlanError::InvalidSearchRadius {
                miles: self.search_radius_miles,
            });
        }
        if !is_non_negative(self.checkpoint_margin_miles) {
            return Err(PlanError::InvalidCheckpointMargin {
                miles: self.checkpoint_margin_miles,
            });
        }
        Ok(())
    }
}

pub(crate) fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Find the cheapest nearby station at each checkpoint along `route`.
///
/// Routes no longer than the tank range need no stop and yield nothing.
/// Checkpoints without a station in range are skipped; the optimizer bridges
/// the resulting gap later. Ties on price go to the station listed first in
/// `stations`.
///
/// # Errors
///
/// Returns the [`LocatorSettings::validate`] errors for unusable settings.
#[expect(
    clippy::float_arithmetic,
    reason = "distances along the route are accumulated in floating point"
)]
pub fn locate_candidates(
    route: &fuelstop_core::Route,
    stations: &[FuelStation],
    settings: &LocatorSettings,
) -> Result<Vec<CandidateStop>, PlanError> {
    settings.validate()?;
    if route.total_miles() <= settings.tank_range_miles {
        return Ok(Vec::new());
    }

    let threshold = settings.tank_range_miles - settings.checkpoint_margin_miles;
    let mut since_checkpoint = 0.0;
    let mut from_start = 0.0;
    let mut candidates = Vec::new();

    for (from, to) in route.segments() {
        let segment = geodesic_miles(from, to);
        since_checkpoint += segment;
        from_start += segment;
        if since_checkpoint < threshold {
            continue;
        }

        match cheapest_within(to, stations, settings.search_radius_miles) {
            Some((station, offset)) => {
                let distance_from_start = from_start + offset;
                debug!(
                    "checkpoint at {from_start:.1} mi: station {} at {:.1} mi for {}",
                    station.id, distance_from_start, station.retail_price
                );
                candidates.push(CandidateStop::new(station.clone(), distance_from_start));
            }
            None => debug!(
                "checkpoint at {from_start:.1} mi: no station within {} mi",
                settings.search_radius_miles
            ),
        }
        since_checkpoint = 0.0;
    }

    Ok(candidates)
}

fn cheapest_within(
    point: Coord<f64>,
    stations: &[FuelStation],
    radius_miles: f64,
) -> Option<(&FuelStation, f64)> {
    stations
        .iter()
        .map(|station| (station, geodesic_miles(point, station.location)))
        .filter(|(_, miles)| *miles <= radius_miles)
        // `min_by` keeps the first of several equal prices.
        .min_by(|(lhs, _), (rhs, _)| lhs.retail_price.cmp(&rhs.retail_price))
}
