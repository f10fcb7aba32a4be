//! OSRM API response types for the Route service.
//!
//! Responses are expected to have been requested with
//! `overview=full&geometries=geojson`, so each route carries its polyline as
//! GeoJSON `[longitude, latitude]` pairs and its length in metres.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use fuelstop_core::{METRES_PER_MILE, Route, RouteError};
use geo::Coord;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::fs::open_utf8_file;

/// OSRM Route API response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"InvalidQuery"` - Invalid query parameters
    /// - `"NoRoute"` - No route between the coordinates
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Alternative routes, fastest first.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// A single route within a [`RouteResponse`].
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Driving distance in metres.
    pub distance: f64,
    /// Route polyline.
    pub geometry: RouteGeometry,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Deserialize)]
pub struct RouteGeometry {
    /// `[longitude, latitude]` pairs in travel order.
    pub coordinates: Vec<[f64; 2]>,
}

/// Errors returned when reading an OSRM route.
#[derive(Debug, Error)]
pub enum RouteLoadError {
    /// The response file could not be opened.
    #[error("failed to open route response at {path}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The response file was not a valid OSRM response.
    #[error("failed to decode route response at {path}")]
    Decode {
        /// Path that failed to decode.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// OSRM reported a failure.
    #[error("routing service returned {code}: {message}")]
    Service {
        /// Status code from OSRM.
        code: String,
        /// Message from OSRM, empty when none was given.
        message: String,
    },
    /// The response succeeded but held no route.
    #[error("routing service returned no route")]
    NoRoute,
    /// The route geometry or distance was unusable.
    #[error(transparent)]
    InvalidRoute(#[from] RouteError),
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// Convert the first route into a [`Route`] measured in miles.
    ///
    /// # Examples
    /// ```
    /// use fuelstop_data::RouteResponse;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let response: RouteResponse = serde_json::from_str(
    ///     r#"{"code": "Ok", "routes": [{"distance": 1609.344,
    ///         "geometry": {"type": "LineString",
    ///                      "coordinates": [[-100.0, 30.0], [-100.0, 30.01]]}}]}"#,
    /// )?;
    /// let route = response.into_route()?;
    /// assert!((route.total_miles() - 1.0).abs() < 1e-12);
    /// # Ok(())
    /// # }
    /// ```
    pub fn into_route(self) -> Result<Route, RouteLoadError> {
        if !self.is_ok() {
            return Err(RouteLoadError::Service {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }
        let first = self
            .routes
            .into_iter()
            .next()
            .ok_or(RouteLoadError::NoRoute)?;
        let points = first
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| Coord { x: lon, y: lat })
            .collect();
        Ok(Route::new(points, first.distance / METRES_PER_MILE)?)
    }
}

/// Read an OSRM route response from `path`.
pub fn load_route(path: &Utf8Path) -> Result<Route, RouteLoadError> {
    let file = open_utf8_file(path).map_err(|source| RouteLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let response: RouteResponse =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            RouteLoadError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let route = response.into_route()?;
    debug!(
        "loaded {} route point(s) over {:.1} mi from {path}",
        route.points().len(),
        route.total_miles()
    );
    Ok(route)
}
