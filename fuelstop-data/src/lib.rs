//! File-backed data sources for the fuel stop planner.
//!
//! Responsibilities:
//! - Load station catalogs from JSON exports.
//! - Decode OSRM route responses into [`fuelstop_core::Route`] values.
//! - Keep filesystem access behind capability-based helpers.
//!
//! Boundaries:
//! - Do not encode planning rules (live in `fuelstop-planner`).
//! - Do not perform network I/O; responses are read from disk.

pub mod catalog;
pub mod fs;
pub mod osrm;

pub use catalog::{CatalogLoadError, JsonStationCatalog, RawPrice, StationRecord, parse_price};
pub use osrm::{OsrmRoute, RouteGeometry, RouteLoadError, RouteResponse, load_route};
