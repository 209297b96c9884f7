//! Great-circle bearing and distance between two positions.
//!
//! All inputs are decimal degrees (latitude in [-90, 90], longitude in
//! [-180, 180]). Results are rounded the way they are shown to race
//! officers: bearings to whole degrees, distances to hundredths of a
//! nautical mile.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Initial compass bearing from `a` to `b`, in whole degrees within [0, 360).
pub fn bearing(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    let initial = (y.atan2(x).to_degrees() + 360.0) % 360.0;
    let rounded = initial.round();

    // 359.5 and above rounds up onto north
    if rounded >= 360.0 {
        0.0
    } else {
        rounded
    }
}

/// Haversine distance from `a` to `b` in nautical miles, rounded to 2 decimals.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    round_to_hundredths(EARTH_RADIUS_NM * c)
}

pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
