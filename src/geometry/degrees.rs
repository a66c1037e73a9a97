//! Flat-earth degree/meter conversions.
//!
//! Uses the equatorial meters-per-degree constant everywhere, with a
//! cos(latitude) correction for longitude steps. This avoids real geodesy
//! while staying accurate enough for survey areas a few kilometers across.

use crate::domain::GeoPoint;

/// Meters per degree of latitude (flat-earth approximation).
pub const METERS_PER_DEGREE: f64 = 111320.0;

/// Latitude step in degrees for a given spacing in meters.
pub fn lat_step(spacing_m: f64) -> f64 {
    spacing_m / METERS_PER_DEGREE
}

/// Longitude step in degrees for a given spacing, at a given latitude.
///
/// Corrects for meridian convergence; must be recomputed whenever the active
/// latitude changes.
pub fn lon_step(spacing_m: f64, lat: f64) -> f64 {
    spacing_m / (METERS_PER_DEGREE * lat.to_radians().cos())
}

/// Approximate ground distance between two points in meters.
pub fn flat_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let mid_lat = ((a.lat + b.lat) / 2.0).to_radians();
    let dx = (b.lon - a.lon) * mid_lat.cos() * METERS_PER_DEGREE;
    let dy = (b.lat - a.lat) * METERS_PER_DEGREE;
    (dx * dx + dy * dy).sqrt()
}
