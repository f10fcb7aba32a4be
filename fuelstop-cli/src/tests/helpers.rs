//! Test helpers that write route and catalog fixtures to a temp directory.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

/// Route length used by [`TripFiles`], in metres (700 miles).
pub(super) const TRIP_METRES: f64 = 1_126_540.8;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write fixture");
}

pub(super) fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace")
}

/// OSRM response for a route due north along the 100th meridian west.
pub(super) fn meridian_response(start_lat: u32, end_lat: u32, metres: f64) -> Value {
    let coordinates: Vec<Value> = (start_lat * 10..=end_lat * 10)
        .map(|tenth| json!([-100.0, f64::from(tenth) / 10.0]))
        .collect();
    json!({
        "code": "Ok",
        "routes": [{
            "distance": metres,
            "duration": 36_000.0,
            "geometry": { "type": "LineString", "coordinates": coordinates }
        }]
    })
}

/// A 700 mile route with two stations near the first checkpoint.
pub(super) struct TripFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
    route: Utf8PathBuf,
    stations: Utf8PathBuf,
}

impl TripFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = utf8_root(&dir);
        let route = root.join("route.json");
        let stations = root.join("stations.json");

        let response = meridian_response(30, 40, TRIP_METRES);
        write_utf8(&route, response.to_string().as_bytes());
        let catalog = json!([
            {"id": 1, "name": "Loves", "address": "US-83", "city": "Liberal", "state": "KS",
             "retail_price": "3,59", "latitude": 36.6, "longitude": -100.1},
            {"id": 2, "name": "Pilot", "address": "US-83", "city": "Liberal", "state": "KS",
             "retail_price": "3,29", "latitude": 36.6, "longitude": -99.9},
            {"id": 3, "name": "Not geocoded", "retail_price": "2.99"}
        ]);
        write_utf8(&stations, catalog.to_string().as_bytes());

        Self {
            _dir: dir,
            root,
            route,
            stations,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn route(&self) -> &Utf8Path {
        &self.route
    }

    pub(super) fn stations(&self) -> &Utf8Path {
        &self.stations
    }
}
