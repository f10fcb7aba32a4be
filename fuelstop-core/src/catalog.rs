//! Read-only access to the fuel station catalog.
//!
//! Planners take one snapshot of the catalog per planning call. Stations that
//! lack coordinates never reach this boundary: catalog implementations must
//! drop them while loading.

use crate::FuelStation;

/// Read-only source of fuel stations.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use rust_decimal::Decimal;
/// use fuelstop_core::{FuelStation, StationCatalog};
///
/// struct FixedCatalog {
///     stations: Vec<FuelStation>,
/// }
///
/// impl StationCatalog for FixedCatalog {
///     fn list_all_stations(&self) -> Box<dyn Iterator<Item = FuelStation> + Send + '_> {
///         Box::new(self.stations.iter().cloned())
///     }
/// }
///
/// let station = FuelStation::new(1, "Pilot", Coord { x: 0.0, y: 0.0 }, Decimal::ONE).unwrap();
/// let catalog = FixedCatalog { stations: vec![station.clone()] };
/// let listed: Vec<_> = catalog.list_all_stations().collect();
/// assert_eq!(listed, vec![station]);
/// ```
pub trait StationCatalog {
    /// Return every station in the catalog.
    ///
    /// Order is unspecified; callers that need deterministic selection must
    /// sort the snapshot themselves.
    fn list_all_stations(&self) -> Box<dyn Iterator<Item = FuelStation> + Send + '_>;
}

impl<C: StationCatalog + ?Sized> StationCatalog for &C {
    fn list_all_stations(&self) -> Box<dyn Iterator<Item = FuelStation> + Send + '_> {
        (**self).list_all_stations()
    }
}
