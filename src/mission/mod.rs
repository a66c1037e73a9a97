pub mod sequencer;
pub mod session;

pub use sequencer::{
    append_waypoint, build_mission, connections_of, path_length_m, set_waypoint_properties,
};
pub use session::Session;
