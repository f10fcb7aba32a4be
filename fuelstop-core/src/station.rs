//! Fuel stations offered by a catalog.

use geo::Coord;
use rust_decimal::Decimal;
use thiserror::Error;

/// A retail fuel station with a known position and price.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Stations are
/// owned by a [`StationCatalog`](crate::StationCatalog) and are never mutated
/// by planners.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rust_decimal::Decimal;
/// use fuelstop_core::FuelStation;
///
/// # fn main() -> Result<(), fuelstop_core::FuelStationError> {
/// let station = FuelStation::new(
///     7,
///     "Flying J",
///     Coord { x: -97.33, y: 37.69 },
///     Decimal::new(3459, 3),
/// )?
/// .with_address("I-135 Exit 1", "Wichita", "KS");
///
/// assert_eq!(station.id, 7);
/// assert_eq!(station.state, "KS");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelStation {
    /// Catalog identifier.
    pub id: u64,
    /// Trading name of the station.
    pub name: String,
    /// Street address, empty when unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
    /// City, empty when unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: String,
    /// Two-letter state code, empty when unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub state: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Retail price per unit of fuel.
    pub retail_price: Decimal,
}

/// Errors returned by [`FuelStation::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuelStationError {
    /// The retail price was below zero.
    #[error("station {id} has a negative retail price {price}")]
    NegativePrice {
        /// Offending station identifier.
        id: u64,
        /// Price as supplied.
        price: Decimal,
    },
    /// The coordinate was not a finite WGS84 position.
    #[error("station {id} has an invalid location (lon {lon}, lat {lat})")]
    InvalidLocation {
        /// Offending station identifier.
        id: u64,
        /// Longitude as supplied.
        lon: f64,
        /// Latitude as supplied.
        lat: f64,
    },
}

impl FuelStation {
    /// Validate and construct a station without address details.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        location: Coord<f64>,
        retail_price: Decimal,
    ) -> Result<Self, FuelStationError> {
        if retail_price < Decimal::ZERO {
            return Err(FuelStationError::NegativePrice {
                id,
                price: retail_price,
            });
        }
        if !is_wgs84(location) {
            return Err(FuelStationError::InvalidLocation {
                id,
                lon: location.x,
                lat: location.y,
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            location,
            retail_price,
        })
    }

    /// Attach postal address details.
    #[must_use]
    pub fn with_address(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        self.address = address.into();
        self.city = city.into();
        self.state = state.into();
        self
    }
}

/// Whether `coord` is a finite longitude/latitude pair within range.
pub(crate) fn is_wgs84(coord: Coord<f64>) -> bool {
    coord.x.is_finite()
        && coord.y.is_finite()
        && (-180.0..=180.0).contains(&coord.x)
        && (-90.0..=90.0).contains(&coord.y)
}
