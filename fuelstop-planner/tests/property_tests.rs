//! Property-based tests for the stop optimizer.
//!
//! # Invariants tested
//!
//! - **Fuel accounting:** fuel bought across all stops covers the whole route.
//! - **Ordering and range:** stops advance and each is reachable from the
//!   previous one on a single tank.
//! - **Decimal costs:** every stop cost is the cent-rounded decimal product of
//!   its fuel and price, and the trip cost is their sum.
//! - **Determinism:** identical inputs give identical plans.
//! - **Short routes:** routes within one tank need no stop.


use fuelstop_core::{fuel_cost, quantize_cents};
use fuelstop_planner::{StopOptimizer, optimize, total_cost};
use proptest::prelude::*;
use rust_decimal::Decimal;

use proptest_support::{
    TANK_RANGE_MILES, assert_ordered_within_range, dense_candidates, sparse_candidates, vehicle,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: with dense candidates, fuel bought times mpg equals the route.
    #[test]
    fn fuel_covers_the_whole_route(
        route_miles in 501.0_f64..3_000.0_f64,
        mpg in 4.0_f64..15.0_f64,
        candidates in dense_candidates(),
    ) {
        let stops = optimize(route_miles, &candidates, vehicle(mpg)).expect("valid vehicle");
        prop_assert!(!stops.is_empty());

        let fuel: f64 = stops.iter().map(|stop| stop.total_fuel).sum();
        prop_assert!(
            (fuel * mpg - route_miles).abs() <= route_miles * 1e-9,
            "fuel {fuel} at {mpg} mpg does not cover {route_miles} mi"
        );
    }

    /// Property: stops advance along the route within one tank of each other.
    #[test]
    fn stops_are_ordered_and_reachable(
        route_miles in 501.0_f64..3_000.0_f64,
        candidates in dense_candidates(),
    ) {
        let outcome = StopOptimizer::new(route_miles, &candidates, vehicle(10.0))
            .and_then(|optimizer| optimizer.run())
            .expect("valid vehicle");
        prop_assert!(outcome.gaps.is_empty());

        let positions: Vec<f64> = outcome.stops.iter().map(|s| s.distance_from_start).collect();
        assert_ordered_within_range(&positions, TANK_RANGE_MILES)?;
    }

    /// Property: costs are exact decimal products, rounded to cents.
    #[test]
    fn costs_are_rounded_decimal_products(
        route_miles in 0.0_f64..3_000.0_f64,
        mpg in 4.0_f64..15.0_f64,
        candidates in sparse_candidates(),
    ) {
        let stops = optimize(route_miles, &candidates, vehicle(mpg)).expect("valid vehicle");
        for stop in &stops {
            prop_assert_eq!(Ok(stop.cost), fuel_cost(stop.total_fuel, stop.station.retail_price));
            prop_assert_eq!(stop.cost.scale(), 2);
        }

        let sum = stops.iter().fold(Decimal::ZERO, |acc, stop| acc + stop.cost);
        prop_assert_eq!(total_cost(&stops), quantize_cents(sum));
    }

    /// Property: the optimizer is deterministic, gaps included.
    #[test]
    fn optimizing_is_deterministic(
        route_miles in 0.0_f64..3_000.0_f64,
        candidates in sparse_candidates(),
    ) {
        let first = StopOptimizer::new(route_miles, &candidates, vehicle(10.0))
            .and_then(|optimizer| optimizer.run())
            .expect("valid vehicle");
        let second = StopOptimizer::new(route_miles, &candidates, vehicle(10.0))
            .and_then(|optimizer| optimizer.run())
            .expect("valid vehicle");
        prop_assert_eq!(first, second);
    }

    /// Property: a route within one tank needs no stop and costs nothing.
    #[test]
    fn short_routes_cost_nothing(
        route_miles in 0.0_f64..=TANK_RANGE_MILES,
        candidates in sparse_candidates(),
    ) {
        let stops = optimize(route_miles, &candidates, vehicle(10.0)).expect("valid vehicle");
        prop_assert!(stops.is_empty());
        prop_assert_eq!(total_cost(&stops), Decimal::ZERO);
    }
}
