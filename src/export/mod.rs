pub mod xml;

pub use xml::{DEFAULT_MISSION_FILENAME, mission_to_xml, write_mission_xml};
