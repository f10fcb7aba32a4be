//! Test-only, in-memory `StationCatalog` implementation and station helpers
//! used by unit and behaviour tests.

use geo::Coord;
use rust_decimal::Decimal;

use crate::{CandidateStop, FuelStation, StationCatalog};

/// In-memory `StationCatalog` implementation used in tests.
#[derive(Default, Debug, Clone)]
pub struct MemoryCatalog {
    stations: Vec<FuelStation>,
}

impl MemoryCatalog {
    /// Create a catalog containing a single station.
    #[must_use]
    pub fn with_station(station: FuelStation) -> Self {
        Self::with_stations(std::iter::once(station))
    }

    /// Create a catalog from a collection of stations.
    pub fn with_stations<I>(stations: I) -> Self
    where
        I: IntoIterator<Item = FuelStation>,
    {
        Self {
            stations: stations.into_iter().collect(),
        }
    }
}

impl StationCatalog for MemoryCatalog {
    fn list_all_stations(&self) -> Box<dyn Iterator<Item = FuelStation> + Send + '_> {
        Box::new(self.stations.iter().cloned())
    }
}

/// Construct a station named after its id at (`lat`, `lon`).
///
/// Coordinates outside WGS84 are clamped so that helpers never fail.
#[must_use]
pub fn station(id: u64, lat: f64, lon: f64, price: Decimal) -> FuelStation {
    FuelStation {
        id,
        name: format!("Station {id}"),
        address: String::new(),
        city: String::new(),
        state: String::new(),
        location: Coord {
            x: lon.clamp(-180.0, 180.0),
            y: lat.clamp(-90.0, 90.0),
        },
        retail_price: price.max(Decimal::ZERO),
    }
}

/// Construct a candidate at `distance_from_start` miles with the given price.
///
/// The station sits at the origin; only its price and distance matter to the
/// optimizer.
#[must_use]
pub fn candidate(id: u64, distance_from_start: f64, price: Decimal) -> CandidateStop {
    CandidateStop::new(station(id, 0.0, 0.0, price), distance_from_start)
}
