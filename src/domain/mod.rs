pub mod point;
pub mod waypoint;

pub use point::{GeoPoint, Polygon};
pub use waypoint::{ActionType, Mission, Waypoint, WaypointId, WaypointIdGen};
