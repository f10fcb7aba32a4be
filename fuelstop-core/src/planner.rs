use thiserror::Error;

use crate::{CostError, Plan, Route, RouteError};

/// Default distance in miles a full tank sustains.
pub const DEFAULT_TANK_RANGE_MILES: f64 = 500.0;

/// Default fuel economy in miles per unit of fuel.
pub const DEFAULT_MPG: f64 = 10.0;

/// Tank range and fuel economy of the vehicle being planned for.
///
/// # Examples
/// ```rust
/// use fuelstop_core::VehicleProfile;
///
/// let vehicle = VehicleProfile::default();
/// assert_eq!(vehicle.tank_range_miles, 500.0);
/// assert_eq!(vehicle.mpg, 10.0);
/// assert!(vehicle.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleProfile {
    /// Distance in miles a full tank sustains.
    pub tank_range_miles: f64,
    /// Miles travelled per unit of fuel.
    pub mpg: f64,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self {
            tank_range_miles: DEFAULT_TANK_RANGE_MILES,
            mpg: DEFAULT_MPG,
        }
    }
}

impl VehicleProfile {
    /// Check that both figures are finite and strictly positive.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !is_positive(self.tank_range_miles) {
            return Err(PlanError::InvalidTankRange {
                miles: self.tank_range_miles,
            });
        }
        if !is_positive(self.mpg) {
            return Err(PlanError::InvalidMpg { mpg: self.mpg });
        }
        Ok(())
    }
}

/// Parameters for a planning call.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Route to refuel along.
    pub route: Route,
    /// Vehicle driving the route.
    pub vehicle: VehicleProfile,
}

impl PlanRequest {
    /// Pair a route with a vehicle.
    #[must_use]
    pub const fn new(route: Route, vehicle: VehicleProfile) -> Self {
        Self { route, vehicle }
    }

    /// Validate the request before any planning work starts.
    ///
    /// Routes are validated on construction, so only the vehicle is checked.
    pub fn validate(&self) -> Result<(), PlanError> {
        self.vehicle.validate()
    }
}

/// Errors returned by [`StopPlanner::plan`].
///
/// Every variant describes malformed input, or a fuel quantity derived from
/// it that cannot be priced. A route that cannot be fully
/// covered by stations is not an error: planners return a plan flagged as
/// soft-infeasible instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The route failed validation.
    #[error("invalid route: {0}")]
    InvalidRoute(#[from] RouteError),
    /// Tank range was zero, negative or not finite.
    #[error("tank range must be a positive number of miles, found {miles}")]
    InvalidTankRange {
        /// Tank range as supplied.
        miles: f64,
    },
    /// Fuel economy was zero, negative or not finite.
    #[error("fuel economy must be a positive number of miles per unit, found {mpg}")]
    InvalidMpg {
        /// Fuel economy as supplied.
        mpg: f64,
    },
    /// Station search radius was negative or not finite.
    #[error("search radius must be a non-negative number of miles, found {miles}")]
    InvalidSearchRadius {
        /// Radius as supplied.
        miles: f64,
    },
    /// Checkpoint margin was negative or not finite.
    #[error("checkpoint margin must be a non-negative number of miles, found {miles}")]
    InvalidCheckpointMargin {
        /// Margin as supplied.
        miles: f64,
    },
    /// A stop's fuel quantity could not be priced.
    #[error("failed to price a stop: {0}")]
    Cost(#[from] CostError),
}

/// Choose refuelling stops along a route.
///
/// Implementations must reject malformed requests with a [`PlanError`]
/// rather than panicking, and must not mutate the station catalog.
/// Planners must be `Send + Sync` so independent requests can be planned
/// concurrently.
pub trait StopPlanner: Send + Sync {
    /// Plan the stops for `request`.
    fn plan(&self, request: &PlanRequest) -> Result<Plan, PlanError>;
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
