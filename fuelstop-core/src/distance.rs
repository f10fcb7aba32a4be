//! Geodesic distances in statute miles.

use geo::{Coord, Distance, Geodesic, Point};

/// Length of one international statute mile in metres.
pub const METRES_PER_MILE: f64 = 1_609.344;

/// Distance in miles between two WGS84 coordinates on the ellipsoid.
///
/// Coordinates use `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fuelstop_core::geodesic_miles;
///
/// let here = Coord { x: -87.6298, y: 41.8781 };
/// assert_eq!(geodesic_miles(here, here), 0.0);
/// ```
#[must_use]
pub fn geodesic_miles(from: Coord<f64>, to: Coord<f64>) -> f64 {
    Geodesic.distance(Point::from(from), Point::from(to)) / METRES_PER_MILE
}
