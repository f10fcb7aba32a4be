//! Driving routes produced by an external routing service.
//!
//! A route is the polyline the vehicle follows plus the distance reported by
//! the router. The distance is authoritative for planning; the polyline is
//! only sampled to find stations.

use geo::Coord;
use thiserror::Error;

use crate::station::is_wgs84;

/// An ordered path with its total driving distance.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fuelstop_core::Route;
///
/// # fn main() -> Result<(), fuelstop_core::RouteError> {
/// let route = Route::new(
///     vec![Coord { x: -87.63, y: 41.88 }, Coord { x: -90.20, y: 38.63 }],
///     297.0,
/// )?;
/// assert_eq!(route.points().len(), 2);
/// assert_eq!(route.total_miles(), 297.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Coord<f64>>,
    total_miles: f64,
}

/// Errors returned by [`Route::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Fewer than two points were supplied.
    #[error("route must contain at least two points, found {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },
    /// The total distance was negative, NaN or infinite.
    #[error("route distance must be finite and non-negative, found {miles}")]
    InvalidDistance {
        /// Distance as supplied.
        miles: f64,
    },
    /// A point was not a finite WGS84 position.
    #[error("route point {index} is not a valid coordinate (lon {lon}, lat {lat})")]
    InvalidPoint {
        /// Position of the point within the route.
        index: usize,
        /// Longitude as supplied.
        lon: f64,
        /// Latitude as supplied.
        lat: f64,
    },
}

impl Route {
    /// Validate and construct a route.
    pub fn new(points: Vec<Coord<f64>>, total_miles: f64) -> Result<Self, RouteError> {
        if points.len() < 2 {
            return Err(RouteError::TooFewPoints {
                count: points.len(),
            });
        }
        if !total_miles.is_finite() || total_miles < 0.0 {
            return Err(RouteError::InvalidDistance { miles: total_miles });
        }
        if let Some((index, point)) = points.iter().enumerate().find(|(_, p)| !is_wgs84(**p)) {
            return Err(RouteError::InvalidPoint {
                index,
                lon: point.x,
                lat: point.y,
            });
        }
        Ok(Self {
            points,
            total_miles,
        })
    }

    /// Ordered route vertices.
    #[must_use]
    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    /// Total driving distance in miles as reported by the router.
    #[must_use]
    pub const fn total_miles(&self) -> f64 {
        self.total_miles
    }

    /// Consecutive point pairs making up the polyline.
    pub fn segments(&self) -> impl Iterator<Item = (Coord<f64>, Coord<f64>)> + '_ {
        self.points.windows(2).filter_map(|pair| match pair {
            [from, to] => Some((*from, *to)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn line() -> Vec<Coord<f64>> {
        vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 0.0, y: 1.0 },
            Coord { x: 0.0, y: 2.0 },
        ]
    }

    #[rstest]
    #[case(Vec::new())]
    #[case(vec![Coord { x: 0.0, y: 0.0 }])]
    fn requires_two_points(#[case] points: Vec<Coord<f64>>) {
        let count = points.len();
        assert_eq!(
            Route::new(points, 0.0),
            Err(RouteError::TooFewPoints { count })
        );
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_distance(line: Vec<Coord<f64>>, #[case] miles: f64) {
        assert!(matches!(
            Route::new(line, miles),
            Err(RouteError::InvalidDistance { .. })
        ));
    }

    #[rstest]
    fn reports_first_invalid_point(mut line: Vec<Coord<f64>>) {
        line.push(Coord { x: 0.0, y: 95.0 });
        assert!(matches!(
            Route::new(line, 10.0),
            Err(RouteError::InvalidPoint { index: 3, .. })
        ));
    }

    #[rstest]
    fn segments_pair_consecutive_points(line: Vec<Coord<f64>>) {
        let route = Route::new(line, 138.0).expect("valid route");
        let segments: Vec<_> = route.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments.first().map(|(_, to)| *to),
            Some(Coord { x: 0.0, y: 1.0 })
        );
    }
}
