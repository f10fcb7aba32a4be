//! Facade crate for the fuel stop planning engine.
//!
//! This crate re-exports the core domain types and exposes the greedy planner
//! and the file-backed data sources behind feature flags.
//!
//! # Examples
//! ```rust
//! # #[cfg(all(feature = "planner-greedy", feature = "test-support"))]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use fuelstop_engine::test_support::{MemoryCatalog, station};
//! use fuelstop_engine::{GreedyPlanner, PlanRequest, Route, StopPlanner, VehicleProfile};
//! use geo::Coord;
//! use rust_decimal::Decimal;
//!
//! let points = (300..=400)
//!     .map(|tenth| Coord { x: -100.0, y: f64::from(tenth) / 10.0 })
//!     .collect();
//! let route = Route::new(points, 700.0)?;
//! let catalog = MemoryCatalog::with_station(station(2, 36.6, -99.9, Decimal::new(329, 2)));
//!
//! let plan = GreedyPlanner::new(catalog).plan(&PlanRequest::new(route, VehicleProfile::default()))?;
//! assert_eq!(plan.stops.len(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "planner-greedy", feature = "test-support")))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use fuelstop_core::{
    CandidateStop, CostError, CoverageGap, FuelStation, FuelStationError, Plan, PlanError,
    PlanRequest, PlannedStop, Route, RouteError, StationCatalog, StopPlanner, VehicleProfile,
    fuel_cost, geodesic_miles, quantize_cents,
};

#[cfg(feature = "test-support")]
pub use fuelstop_core::test_support;

#[cfg(feature = "planner-greedy")]
pub use fuelstop_planner::{GreedyPlanner, GreedyPlannerConfig, total_cost};

#[cfg(feature = "catalog-json")]
pub use fuelstop_data::{CatalogLoadError, JsonStationCatalog, RouteLoadError, load_route};
