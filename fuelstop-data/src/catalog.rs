//! Station catalogs loaded from JSON exports.
//!
//! The document is a JSON array of [`StationRecord`] objects. Prices may be
//! JSON numbers or strings, and strings may use a decimal comma (`"3,459"`).
//! Records that cannot become a valid [`FuelStation`] are skipped with a
//! warning rather than failing the whole load, since geocoding gaps are
//! common in station exports.

use std::io::BufReader;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use fuelstop_core::{FuelStation, StationCatalog};
use geo::Coord;
use log::{info, warn};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::fs::open_utf8_file;

/// One station as it appears in a catalog export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationRecord {
    /// Catalog identifier.
    #[serde(alias = "opis_id")]
    pub id: u64,
    /// Trading name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// Two-letter state code.
    #[serde(default)]
    pub state: String,
    /// Retail price per unit of fuel.
    pub retail_price: RawPrice,
    /// Latitude in degrees, absent when geocoding failed.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees, absent when geocoding failed.
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A price as written in the export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// A JSON number such as `3.459`.
    Number(serde_json::Number),
    /// A string such as `"3.459"` or `"3,459"`.
    Text(String),
}

impl RawPrice {
    /// The exact decimal value, or `None` when the text is not a number.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(number) => parse_price(&number.to_string()),
            Self::Text(text) => parse_price(text),
        }
    }
}

/// Parse a retail price, accepting a decimal comma.
///
/// # Examples
/// ```
/// use fuelstop_data::parse_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_price("3,459"), Some(Decimal::new(3459, 3)));
/// assert_eq!(parse_price(" 3.10 "), Some(Decimal::new(310, 2)));
/// assert_eq!(parse_price("n/a"), None);
/// ```
#[must_use]
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let normalised = raw.trim().replace(',', ".");
    Decimal::from_str(&normalised)
        .or_else(|_| Decimal::from_scientific(&normalised))
        .ok()
}

/// Errors returned when loading a station catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog file could not be opened.
    #[error("failed to open station catalog at {path}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog file was not a JSON array of station records.
    #[error("failed to decode station catalog at {path}")]
    Decode {
        /// Path that failed to decode.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory station catalog populated from a JSON export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonStationCatalog {
    stations: Vec<FuelStation>,
}

impl JsonStationCatalog {
    /// Load and validate the catalog stored at `path`.
    ///
    /// # Examples
    /// ```no_run
    /// use camino::Utf8Path;
    /// use fuelstop_data::JsonStationCatalog;
    ///
    /// # fn main() -> Result<(), fuelstop_data::CatalogLoadError> {
    /// let catalog = JsonStationCatalog::open(Utf8Path::new("stations.json"))?;
    /// println!("{} stations", catalog.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open(path: &Utf8Path) -> Result<Self, CatalogLoadError> {
        let file = open_utf8_file(path).map_err(|source| CatalogLoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<StationRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| CatalogLoadError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        let total = records.len();
        let catalog = Self::from_records(records);
        info!(
            "loaded {} of {total} station(s) from {path}",
            catalog.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from decoded records, skipping unusable ones.
    pub fn from_records(records: impl IntoIterator<Item = StationRecord>) -> Self {
        let stations = records.into_iter().filter_map(into_station).collect();
        Self { stations }
    }

    /// Stations in catalog order.
    #[must_use]
    pub fn stations(&self) -> &[FuelStation] {
        &self.stations
    }

    /// Number of usable stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether no usable station was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl StationCatalog for JsonStationCatalog {
    fn list_all_stations(&self) -> Box<dyn Iterator<Item = FuelStation> + Send + '_> {
        Box::new(self.stations.iter().cloned())
    }
}

fn into_station(record: StationRecord) -> Option<FuelStation> {
    let (Some(lat), Some(lon)) = (record.latitude, record.longitude) else {
        warn!("skipping station {}: no coordinates", record.id);
        return None;
    };
    let Some(price) = record.retail_price.to_decimal() else {
        warn!(
            "skipping station {}: unreadable price {:?}",
            record.id, record.retail_price
        );
        return None;
    };
    match FuelStation::new(record.id, record.name.trim(), Coord { x: lon, y: lat }, price) {
        Ok(station) => Some(station.with_address(
            record.address.trim(),
            record.city.trim(),
            record.state.trim(),
        )),
        Err(err) => {
            warn!("skipping station: {err}");
            None
        }
    }
}
