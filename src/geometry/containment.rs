use crate::domain::{GeoPoint, Polygon};

/// Even-odd ray-cast point-in-polygon test.
///
/// Casts a ray west from the point and counts boundary crossings against the
/// implicitly closed ring. Points exactly on the northern or eastern boundary
/// test as outside; that asymmetry is what keeps bounding-box-edge samples
/// out of a sweep over a polygon that coincides with its own bounding box.
pub fn contains(polygon: &Polygon, point: GeoPoint) -> bool {
    let ring = &polygon.vertices;
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].lon, ring[i].lat);
        let (xj, yj) = (ring[j].lon, ring[j].lat);

        // Edge straddles the point's latitude; the strict/non-strict pair
        // makes vertices count exactly once.
        let straddles = (yi > point.lat) != (yj > point.lat);
        if straddles && point.lon < (xj - xi) * (point.lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ])
    }

    #[test]
    fn test_center_inside() {
        assert!(contains(&unit_square(), GeoPoint::new(0.5, 0.5)));
    }

    #[test]
    fn test_outside() {
        assert!(!contains(&unit_square(), GeoPoint::new(1.5, 0.5)));
        assert!(!contains(&unit_square(), GeoPoint::new(0.5, -0.1)));
        assert!(!contains(&unit_square(), GeoPoint::new(-2.0, 3.0)));
    }

    #[test]
    fn test_north_boundary_outside() {
        // Samples on the bbox's northern edge must not count as inside
        assert!(!contains(&unit_square(), GeoPoint::new(1.0, 0.5)));
    }

    #[test]
    fn test_concave_notch() {
        // U-shape: the notch between the arms is outside
        let u = Polygon::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(3.0, 0.0),
            GeoPoint::new(3.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 2.0),
            GeoPoint::new(3.0, 2.0),
            GeoPoint::new(3.0, 3.0),
            GeoPoint::new(0.0, 3.0),
        ]);
        assert!(contains(&u, GeoPoint::new(0.5, 0.5)));
        assert!(contains(&u, GeoPoint::new(2.0, 0.5)));
        assert!(!contains(&u, GeoPoint::new(2.0, 1.5)));
    }

    #[test]
    fn test_degenerate_ring() {
        let line = Polygon::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]);
        assert!(!contains(&line, GeoPoint::new(0.5, 0.5)));
    }
}
