use crate::domain::{ActionType, GeoPoint, Mission, Polygon, Waypoint, WaypointId, WaypointIdGen};
use crate::error::PlanError;
use crate::geometry::sweep::{SweepConfig, generate_sweep};
use crate::mission::sequencer;

/// One editing session: the active polygon, the live mission, and the current
/// selection, owned in one place instead of ambient globals.
///
/// Created per session, reset via `clear`, dropped when the session ends. All
/// operations are synchronous; at most one mission exists at a time, and a
/// regenerate discards the previous one wholesale.
#[derive(Debug)]
pub struct Session {
    center: GeoPoint,
    zoom: u32,
    polygon: Option<Polygon>,
    mission: Option<Mission>,
    selection: Option<WaypointId>,
    ids: WaypointIdGen,
}

impl Session {
    /// Start a session with the reference origin exported in the mission
    /// header.
    pub fn new(center: GeoPoint, zoom: u32) -> Self {
        Self {
            center,
            zoom,
            polygon: None,
            mission: None,
            selection: None,
            ids: WaypointIdGen::default(),
        }
    }

    /// Replace the active survey polygon. Does not touch the mission; the
    /// caller decides when to regenerate.
    pub fn set_polygon(&mut self, polygon: Polygon) {
        self.polygon = Some(polygon);
    }

    pub fn polygon(&self) -> Option<&Polygon> {
        self.polygon.as_ref()
    }

    pub fn mission(&self) -> Option<&Mission> {
        self.mission.as_ref()
    }

    /// Run the sweep over the active polygon and replace the live mission.
    ///
    /// Input validation happens before the previous mission is discarded, so
    /// a failed generate never leaves a partial or empty mission behind.
    /// Returns the number of waypoints generated; zero is a valid outcome for
    /// a polygon smaller than the sweep spacing.
    pub fn generate(&mut self, config: &SweepConfig) -> Result<usize, PlanError> {
        let polygon = self.polygon.as_ref().ok_or(PlanError::NoPolygon)?;
        let points = generate_sweep(polygon, config)?;

        self.selection = None;
        let mission =
            sequencer::build_mission(points, config, self.center, self.zoom, &mut self.ids);
        let count = mission.len();
        self.mission = Some(mission);
        Ok(count)
    }

    /// Append a manually placed waypoint with default properties.
    ///
    /// Legal before any sweep has run; starts an empty mission in that case.
    pub fn append_manual(&mut self, position: GeoPoint, default_altitude_m: f64) -> WaypointId {
        let mission = self
            .mission
            .get_or_insert_with(|| Mission::new(self.center, self.zoom));
        sequencer::append_waypoint(mission, position, default_altitude_m, &mut self.ids)
    }

    /// Edit one waypoint's flight properties, keyed by identity.
    ///
    /// Silent no-op (returns `false`) when the id is not in the live mission.
    pub fn set_waypoint_properties(
        &mut self,
        id: WaypointId,
        action: ActionType,
        altitude_m: f64,
        air_speed: f64,
    ) -> bool {
        match self.mission.as_mut() {
            Some(mission) => {
                sequencer::set_waypoint_properties(mission, id, action, altitude_m, air_speed)
            }
            None => false,
        }
    }

    /// Mark a waypoint as selected for editing. Returns `false` for a stale
    /// id, leaving any previous selection in place.
    pub fn select(&mut self, id: WaypointId) -> bool {
        let known = self
            .mission
            .as_ref()
            .is_some_and(|m| m.waypoint(id).is_some());
        if known {
            self.selection = Some(id);
        }
        known
    }

    pub fn selected(&self) -> Option<&Waypoint> {
        let mission = self.mission.as_ref()?;
        mission.waypoint(self.selection?)
    }

    /// Identity of the last waypoint in traversal order, if any.
    pub fn last_waypoint_id(&self) -> Option<WaypointId> {
        self.mission.as_ref()?.waypoints.last().map(|w| w.id)
    }

    /// Discard the mission and selection. Keeps the polygon so the operator
    /// can re-sweep with different parameters.
    pub fn clear(&mut self) {
        self.mission = None;
        self.selection = None;
    }
}
