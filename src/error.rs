use thiserror::Error;

/// Invalid-input conditions detected before any mission state is touched.
///
/// A failed waypoint edit (unknown waypoint id) is deliberately NOT an error:
/// `Session::set_waypoint_properties` treats it as a documented no-op and
/// returns `false` instead.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("sweep spacing must be greater than zero, got {0}m")]
    NonPositiveSpacing(f64),

    #[error("default altitude must not be negative, got {0}m")]
    NegativeAltitude(f64),

    #[error("no polygon set; load or draw one before generating")]
    NoPolygon,
}
