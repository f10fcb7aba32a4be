//! Core domain types for the fuel stop planner.
//!
//! The crate defines the values exchanged between the planning stages
//! (routes, stations, candidate and planned stops), the read-only
//! [`StationCatalog`] boundary, and the [`StopPlanner`] trait implemented by
//! planner crates. Constructors return `Result` so that malformed input is
//! rejected before any planning work starts.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod distance;
pub mod money;
pub mod planner;
pub mod route;
pub mod station;
pub mod stop;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::StationCatalog;
pub use distance::{METRES_PER_MILE, geodesic_miles};
pub use money::{CostError, fuel_cost, quantize_cents};
pub use planner::{PlanError, PlanRequest, StopPlanner, VehicleProfile};
pub use route::{Route, RouteError};
pub use station::{FuelStation, FuelStationError};
pub use stop::{CandidateStop, CoverageGap, Plan, PlannedStop};
