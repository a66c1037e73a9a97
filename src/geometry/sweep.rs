use crate::domain::{GeoPoint, Polygon};
use crate::error::PlanError;
use crate::geometry::bounds::BoundingBox;
use crate::geometry::containment::contains;
use crate::geometry::degrees::{lat_step, lon_step};

/// Parameters for one coverage sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Distance between adjacent passes, in meters.
    pub spacing_m: f64,
    /// Altitude assigned to every generated waypoint, in meters.
    pub default_altitude_m: f64,
}

impl SweepConfig {
    pub fn new(spacing_m: f64, default_altitude_m: f64) -> Self {
        Self {
            spacing_m,
            default_altitude_m,
        }
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if !(self.spacing_m > 0.0) {
            return Err(PlanError::NonPositiveSpacing(self.spacing_m));
        }
        if !(self.default_altitude_m >= 0.0) {
            return Err(PlanError::NegativeAltitude(self.default_altitude_m));
        }
        Ok(())
    }
}

/// Generate an inward-spiraling rectangular coverage path over a polygon.
///
/// # Algorithm
/// 1. Start from the polygon's bounding box (top/bottom/left/right).
/// 2. Walk the four edges in order - top west-to-east, right north-to-south,
///    bottom east-to-west, left south-to-north - sampling at the configured
///    spacing, and shrink the walked bound inward after each edge.
/// 3. Keep only samples that fall inside the polygon ring itself; discarding
///    exterior samples is what shapes the rectangular spiral to the polygon.
/// 4. Repeat until the bounds cross.
///
/// Longitude steps are recomputed from the active latitude (meridian
/// convergence); latitude steps are constant. Bounds are advanced by repeated
/// addition of these steps rather than recomputed per ring, matching the
/// point placement of missions generated by earlier versions of this tool.
///
/// A polygon smaller than one spacing unit yields an empty path; that is a
/// valid "no waypoints generated" outcome, not an error.
pub fn generate_sweep(polygon: &Polygon, config: &SweepConfig) -> Result<Vec<GeoPoint>, PlanError> {
    if polygon.vertices.len() < 3 {
        return Err(PlanError::TooFewVertices(polygon.vertices.len()));
    }
    config.validate()?;

    // len >= 3 was checked above
    let bbox = BoundingBox::of_polygon(polygon).ok_or(PlanError::TooFewVertices(0))?;

    let mut top = bbox.north;
    let mut bottom = bbox.south;
    let mut left = bbox.west;
    let mut right = bbox.east;

    let d_lat = lat_step(config.spacing_m);
    let mut points = Vec::new();

    while top > bottom && left < right {
        // Top edge, west to east
        let step = lon_step(config.spacing_m, top);
        let mut lon = left;
        while lon <= right {
            keep_if_inside(polygon, GeoPoint::new(top, lon), &mut points);
            lon += step;
        }
        top -= d_lat;

        // Right edge, from the shrunk top down to the bottom
        let mut lat = top;
        while lat >= bottom {
            keep_if_inside(polygon, GeoPoint::new(lat, right), &mut points);
            lat -= d_lat;
        }
        right -= lon_step(config.spacing_m, lat);

        // Bottom edge, east to west
        let step = lon_step(config.spacing_m, bottom);
        let mut lon = right;
        while lon >= left {
            keep_if_inside(polygon, GeoPoint::new(bottom, lon), &mut points);
            lon -= step;
        }
        bottom += d_lat;

        // Left edge, from the grown bottom up to the top
        let mut lat = bottom;
        while lat <= top {
            keep_if_inside(polygon, GeoPoint::new(lat, left), &mut points);
            lat += d_lat;
        }
        left += lon_step(config.spacing_m, lat);
    }

    Ok(points)
}

fn keep_if_inside(polygon: &Polygon, candidate: GeoPoint, points: &mut Vec<GeoPoint>) {
    if contains(polygon, candidate) {
        points.push(candidate);
    }
}
