use crate::domain::{ActionType, GeoPoint, Mission, Waypoint, WaypointId, WaypointIdGen};
use crate::geometry::flat_distance_m;
use crate::geometry::sweep::SweepConfig;

/// Turn an ordered point sequence into a fresh mission.
///
/// Each point becomes a waypoint with action `waypoint`, the configured
/// default altitude, zero air speed, and a 1-based sequence number in input
/// order.
pub fn build_mission(
    points: Vec<GeoPoint>,
    config: &SweepConfig,
    center: GeoPoint,
    zoom: u32,
    ids: &mut WaypointIdGen,
) -> Mission {
    let mut mission = Mission::new(center, zoom);
    mission.waypoints = points
        .into_iter()
        .enumerate()
        .map(|(i, position)| Waypoint {
            id: ids.next_id(),
            position,
            seq: i as u32 + 1,
            action: ActionType::Waypoint,
            altitude_m: config.default_altitude_m,
            air_speed: 0.0,
        })
        .collect();
    mission
}

/// Append one waypoint with default properties and the next sequence number.
///
/// Used for points placed outside the sweep (a direct map click); does not
/// trigger a re-sweep.
pub fn append_waypoint(
    mission: &mut Mission,
    position: GeoPoint,
    default_altitude_m: f64,
    ids: &mut WaypointIdGen,
) -> WaypointId {
    let id = ids.next_id();
    let seq = mission.waypoints.len() as u32 + 1;
    mission.waypoints.push(Waypoint {
        id,
        position,
        seq,
        action: ActionType::Waypoint,
        altitude_m: default_altitude_m,
        air_speed: 0.0,
    });
    id
}

/// Overwrite the flight properties of one waypoint, keyed by identity.
///
/// Position and sequence number are untouched. Returns `false` without
/// changing anything when the id is not a current mission member; a stale
/// edit is a no-op, never an error.
pub fn set_waypoint_properties(
    mission: &mut Mission,
    id: WaypointId,
    action: ActionType,
    altitude_m: f64,
    air_speed: f64,
) -> bool {
    match mission.waypoints.iter_mut().find(|w| w.id == id) {
        Some(waypoint) => {
            waypoint.action = action;
            waypoint.altitude_m = altitude_m;
            waypoint.air_speed = air_speed;
            true
        }
        None => false,
    }
}

/// Consecutive waypoint pairs in sequence order: N-1 segments for N
/// waypoints, none for N <= 1. Derived on demand, never stored.
pub fn connections_of(mission: &Mission) -> Vec<(&Waypoint, &Waypoint)> {
    mission
        .waypoints
        .windows(2)
        .map(|pair| (&pair[0], &pair[1]))
        .collect()
}

/// Total ground length of the connected path in meters.
pub fn path_length_m(mission: &Mission) -> f64 {
    connections_of(mission)
        .iter()
        .map(|(a, b)| flat_distance_m(a.position, b.position))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(41.0, -87.0),
            GeoPoint::new(41.001, -87.0),
            GeoPoint::new(41.002, -87.0),
        ]
    }

    fn test_mission(points: Vec<GeoPoint>) -> (Mission, WaypointIdGen) {
        let mut ids = WaypointIdGen::default();
        let config = SweepConfig::new(50.0, 3.0);
        let mission = build_mission(points, &config, GeoPoint::new(41.0, -87.0), 18, &mut ids);
        (mission, ids)
    }

    #[test]
    fn test_build_assigns_defaults_and_sequence() {
        let (mission, _) = test_mission(three_points());

        assert_eq!(mission.len(), 3);
        for (i, wp) in mission.waypoints.iter().enumerate() {
            assert_eq!(wp.seq, i as u32 + 1);
            assert_eq!(wp.action, ActionType::Waypoint);
            assert_eq!(wp.altitude_m, 3.0);
            assert_eq!(wp.air_speed, 0.0);
        }
    }

    #[test]
    fn test_relabeling_idempotent() {
        let (first, _) = test_mission(three_points());
        let (second, _) = test_mission(three_points());

        let seqs: Vec<u32> = first.waypoints.iter().map(|w| w.seq).collect();
        let again: Vec<u32> = second.waypoints.iter().map(|w| w.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
        assert_eq!(seqs, again);
    }

    #[test]
    fn test_append_gets_next_sequence_number() {
        let (mut mission, mut ids) = test_mission(three_points()[..2].to_vec());
        assert_eq!(mission.len(), 2);

        let id = append_waypoint(&mut mission, GeoPoint::new(41.5, -87.5), 3.0, &mut ids);

        assert_eq!(mission.len(), 3);
        let added = mission.waypoint(id).unwrap();
        assert_eq!(added.seq, 3);
        assert_eq!(added.action, ActionType::Waypoint);
        assert_eq!(added.altitude_m, 3.0);
        assert_eq!(added.air_speed, 0.0);
    }

    #[test]
    fn test_edit_targets_only_one_waypoint() {
        let (mut mission, _) = test_mission(three_points());
        let target = mission.waypoints[1].id;

        let applied =
            set_waypoint_properties(&mut mission, target, ActionType::Landing, 10.0, 4.5);

        assert!(applied);
        assert_eq!(mission.waypoints[1].action, ActionType::Landing);
        assert_eq!(mission.waypoints[1].altitude_m, 10.0);
        assert_eq!(mission.waypoints[1].air_speed, 4.5);
        assert_eq!(mission.waypoints[1].seq, 2);
        // neighbors untouched
        assert_eq!(mission.waypoints[0].action, ActionType::Waypoint);
        assert_eq!(mission.waypoints[2].altitude_m, 3.0);
    }

    #[test]
    fn test_edit_with_stale_id_is_noop() {
        let (mut mission, mut ids) = test_mission(three_points());
        let stale = ids.next_id();
        let before = mission.clone();

        let applied = set_waypoint_properties(&mut mission, stale, ActionType::Landing, 99.0, 9.0);

        assert!(!applied);
        for (was, is) in before.waypoints.iter().zip(&mission.waypoints) {
            assert_eq!(was.action, is.action);
            assert_eq!(was.altitude_m, is.altitude_m);
            assert_eq!(was.air_speed, is.air_speed);
            assert_eq!(was.seq, is.seq);
        }
    }

    #[test]
    fn test_connections_pair_adjacent_waypoints() {
        let (mission, _) = test_mission(three_points());
        let segments = connections_of(&mission);

        assert_eq!(segments.len(), 2);
        for (a, b) in &segments {
            assert_eq!(a.seq + 1, b.seq);
        }
    }

    #[test]
    fn test_connections_of_short_missions() {
        let (single, _) = test_mission(three_points()[..1].to_vec());
        assert!(connections_of(&single).is_empty());

        let (empty, _) = test_mission(Vec::new());
        assert!(connections_of(&empty).is_empty());
        assert_eq!(path_length_m(&empty), 0.0);
    }

    #[test]
    fn test_path_length() {
        // Two points 0.001 deg of latitude apart: ~111m
        let (mission, _) = test_mission(vec![
            GeoPoint::new(41.0, -87.0),
            GeoPoint::new(41.001, -87.0),
        ]);
        let length = path_length_m(&mission);
        assert!((length - 111.32).abs() < 1.0);
    }
}
