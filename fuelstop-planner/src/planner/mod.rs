//! `GreedyPlanner` implementation over a station catalog.

use fuelstop_core::{
    FuelStation, Plan, PlanError, PlanRequest, StationCatalog, StopPlanner,
};
use log::{info, warn};

use crate::cost::total_cost;
use crate::locator::{
    DEFAULT_CHECKPOINT_MARGIN_MILES, DEFAULT_SEARCH_RADIUS_MILES, LocatorSettings,
    is_non_negative, locate_candidates,
};
use crate::optimizer::StopOptimizer;

/// Configuration for [`GreedyPlanner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreedyPlannerConfig {
    /// Maximum distance between a checkpoint and a station, in miles.
    pub search_radius_miles: f64,
    /// How far before the tank range a checkpoint fires, in miles.
    pub checkpoint_margin_miles: f64,
}

impl Default for GreedyPlannerConfig {
    fn default() -> Self {
        Self {
            search_radius_miles: DEFAULT_SEARCH_RADIUS_MILES,
            checkpoint_margin_miles: DEFAULT_CHECKPOINT_MARGIN_MILES,
        }
    }
}

impl GreedyPlannerConfig {
    /// Check that the radius and margin are finite and non-negative.
    pub fn validate(&self) -> Result<(), PlanError> {
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

/// Greedy planner choosing stops from a read-only station catalog.
///
/// Each call to [`StopPlanner::plan`] takes one snapshot of the catalog and
/// sorts it by station id, so ties between equally priced stations resolve
/// the same way on every run.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use fuelstop_core::test_support::MemoryCatalog;
/// use fuelstop_core::{PlanRequest, Route, StopPlanner, VehicleProfile};
/// use fuelstop_planner::GreedyPlanner;
///
/// let route = Route::new(
///     vec![Coord { x: -100.0, y: 30.0 }, Coord { x: -100.0, y: 34.0 }],
///     276.0,
/// )
/// .unwrap();
/// let planner = GreedyPlanner::new(MemoryCatalog::default());
/// let plan = planner
///     .plan(&PlanRequest::new(route, VehicleProfile::default()))
///     .unwrap();
///
/// assert!(plan.stops.is_empty());
/// assert_eq!(plan.total_cost.to_string(), "0.00");
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlanner<C>
where
    C: StationCatalog,
{
    catalog: C,
    config: GreedyPlannerConfig,
}

impl<C> GreedyPlanner<C>
where
    C: StationCatalog,
{
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, GreedyPlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(catalog: C, config: GreedyPlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GreedyPlannerConfig {
        &self.config
    }

    fn snapshot(&self) -> Vec<FuelStation> {
        let mut stations: Vec<FuelStation> = self.catalog.list_all_stations().collect();
        stations.sort_by_key(|station| station.id);
        stations
    }
}

impl<C> StopPlanner for GreedyPlanner<C>
where
    C: StationCatalog + Send + Sync,
{
    fn plan(&self, request: &PlanRequest) -> Result<Plan, PlanError> {
        request.validate()?;
        self.config.validate()?;

        let route = &request.route;
        let vehicle = request.vehicle;
        let stations = self.snapshot();
        if stations.is_empty() {
            warn!("station catalog is empty; no stops can be planned");
        }

        let settings = LocatorSettings {
            tank_range_miles: vehicle.tank_range_miles,
            search_radius_miles: self.config.search_radius_miles,
            checkpoint_margin_miles: self.config.checkpoint_margin_miles,
        };
        let candidates = locate_candidates(route, &stations, &settings)?;
        let outcome = StopOptimizer::new(route.total_miles(), &candidates, vehicle)?.run()?;

        let total = total_cost(&outcome.stops);
        let plan = Plan::new(route.total_miles(), outcome.stops, outcome.gaps, total);
        info!(
            "planned {} stop(s) from {} candidate(s) over {:.1} mi for {}{}",
            plan.stops.len(),
            candidates.len(),
            plan.distance_miles,
            plan.total_cost,
            if plan.soft_infeasible {
                " (coverage gaps bridged)"
            } else {
                ""
            }
        );
        Ok(plan)
    }
}
