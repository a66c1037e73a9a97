use crate::domain::{GeoPoint, Polygon};

/// Axis-aligned bounding box of a polygon, in degrees.
///
/// Invariant: north >= south and east >= west. Rings crossing the
/// antimeridian are not supported.
#[derive(Debug, Clone)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Compute the bounding box of a polygon's vertices.
    ///
    /// Returns `None` for an empty vertex list.
    pub fn of_polygon(polygon: &Polygon) -> Option<Self> {
        let first = polygon.vertices.first()?;

        let mut north = first.lat;
        let mut south = first.lat;
        let mut east = first.lon;
        let mut west = first.lon;

        for v in &polygon.vertices[1..] {
            north = north.max(v.lat);
            south = south.min(v.lat);
            east = east.max(v.lon);
            west = west.min(v.lon);
        }

        Some(Self {
            north,
            south,
            east,
            west,
        })
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// North-south extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// East-west extent in degrees.
    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::new(vec![
            GeoPoint::new(41.0, -87.0),
            GeoPoint::new(41.2, -87.1),
            GeoPoint::new(41.1, -86.9),
        ])
    }

    #[test]
    fn test_bbox_of_polygon() {
        let bbox = BoundingBox::of_polygon(&triangle()).unwrap();

        assert_eq!(bbox.north, 41.2);
        assert_eq!(bbox.south, 41.0);
        assert_eq!(bbox.east, -86.9);
        assert_eq!(bbox.west, -87.1);
        assert!(bbox.lat_span() >= 0.0);
        assert!(bbox.lon_span() >= 0.0);
    }

    #[test]
    fn test_bbox_center() {
        let center = BoundingBox::of_polygon(&triangle()).unwrap().center();
        assert!((center.lat - 41.1).abs() < 1e-12);
        assert!((center.lon - (-87.0)).abs() < 1e-12);
    }

    #[test]
    fn test_bbox_empty() {
        assert!(BoundingBox::of_polygon(&Polygon::new(Vec::new())).is_none());
    }
}
