use super::GeoPoint;

/// Flight action performed at a waypoint.
///
/// The raw form is the lowercase hyphenated token used in config files and on
/// the editing surface ("take-off"); the exported XML uses the upper-snake
/// form ("TAKE_OFF"). Unknown tokens are carried through as `Custom` so ground
/// stations with extra action types keep working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionType {
    Waypoint,
    TakeOff,
    PosholdTime,
    Rth,
    Landing,
    Custom(String),
}

impl ActionType {
    /// Parse the raw lowercase token.
    pub fn from_raw(raw: &str) -> ActionType {
        match raw {
            "waypoint" => ActionType::Waypoint,
            "take-off" => ActionType::TakeOff,
            "poshold-time" => ActionType::PosholdTime,
            "rth" => ActionType::Rth,
            "landing" => ActionType::Landing,
            other => ActionType::Custom(other.to_string()),
        }
    }

    pub fn as_raw(&self) -> &str {
        match self {
            ActionType::Waypoint => "waypoint",
            ActionType::TakeOff => "take-off",
            ActionType::PosholdTime => "poshold-time",
            ActionType::Rth => "rth",
            ActionType::Landing => "landing",
            ActionType::Custom(raw) => raw,
        }
    }

    /// XML `action` attribute: raw token uppercased, `-` replaced with `_`.
    pub fn action_attr(&self) -> String {
        self.as_raw().to_uppercase().replace('-', "_")
    }

    /// XML `flag` attribute. 165 marks a landing item; the match is on the
    /// raw token, case-sensitive, per the mwp file format.
    pub fn flag(&self) -> u32 {
        if self.as_raw() == "landing" { 165 } else { 0 }
    }
}

/// Stable identity of a waypoint within a session.
///
/// Identity never changes across edits or renumbering; it is how the
/// interaction layer refers back to a waypoint (a marker holds an id, never
/// the reverse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WaypointId(u64);

/// Hands out session-unique waypoint ids.
#[derive(Debug, Default)]
pub struct WaypointIdGen {
    next: u64,
}

impl WaypointIdGen {
    pub fn next_id(&mut self) -> WaypointId {
        self.next += 1;
        WaypointId(self.next)
    }
}

/// One mission waypoint. Owns its own flight properties; there is no side
/// table keyed by rendering handles.
#[derive(Debug, Clone)]
pub struct Waypoint {
    pub id: WaypointId,
    pub position: GeoPoint,
    /// 1-based position in traversal order. Renumbered densely from the
    /// current waypoint order at export time.
    pub seq: u32,
    pub action: ActionType,
    pub altitude_m: f64,
    pub air_speed: f64,
}

/// The exportable mission: ordered waypoints plus the reference origin the
/// ground station centers its view on.
#[derive(Debug, Clone)]
pub struct Mission {
    pub center: GeoPoint,
    pub zoom: u32,
    pub waypoints: Vec<Waypoint>,
}

impl Mission {
    pub fn new(center: GeoPoint, zoom: u32) -> Self {
        Self {
            center,
            zoom,
            waypoints: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id == id)
    }
}
