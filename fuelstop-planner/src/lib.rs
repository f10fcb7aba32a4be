//! Greedy fuel stop planner.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`StopPlanner`](fuelstop_core::StopPlanner) trait. Planning runs three
//! stages in sequence:
//!
//! 1. [`locate_candidates`] samples the route polyline and, whenever the
//!    distance since the last checkpoint approaches the tank range, picks the
//!    cheapest station within a search radius of the route.
//! 2. [`StopOptimizer`] walks the route in tank-range windows and chooses one
//!    stop per window by a price score that mildly penalises distance. Windows
//!    with no reachable station are bridged by loading extra fuel at the
//!    previous stop.
//! 3. [`total_cost`] sums the per-stop costs in fixed-precision decimals.
//!
//! The stages are pure and synchronous; the planner only touches the station
//! catalog once per call to take a snapshot.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cost;
mod locator;
mod optimizer;
mod planner;

pub use cost::total_cost;
pub use locator::{
    DEFAULT_CHECKPOINT_MARGIN_MILES, DEFAULT_SEARCH_RADIUS_MILES, LocatorSettings,
    locate_candidates,
};
pub use optimizer::{OptimizerState, StopOptimizer, Transition, optimize};
pub use planner::{GreedyPlanner, GreedyPlannerConfig};
