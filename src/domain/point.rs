use serde::Deserialize;

/// A geographic position in WGS84 degrees.
///
/// Treated as flat for distance math; accurate enough for survey areas a few
/// kilometers across.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    /// Longitude in degrees. `lng` is accepted on input for compatibility
    /// with map-layer exports that use that spelling.
    #[serde(alias = "lng")]
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Survey area boundary: an ordered ring of vertices.
///
/// Closure is implicit - the last vertex connects back to the first, and a
/// duplicated first/last vertex is tolerated. The sweep only reads it.
#[derive(Debug, Clone, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<GeoPoint>,
}

impl Polygon {
    pub fn new(vertices: Vec<GeoPoint>) -> Self {
        Self { vertices }
    }

    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }
}
