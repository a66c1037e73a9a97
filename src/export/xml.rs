use crate::domain::Mission;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Conventional name ground stations expect for a downloaded mission.
pub const DEFAULT_MISSION_FILENAME: &str = "mission.xml";

/// Serialize a mission to mwp mission-planner XML.
///
/// Format (one `missionitem` per waypoint, `no` renumbered 1..N from the
/// current waypoint order):
///
/// ```xml
/// <mission>
///   <version value="2.3-pre8"/>
///   <mwp cx="..." cy="..." home-x="0" home-y="0" zoom="..."/>
///   <missionitem no="1" action="WAYPOINT" lat="..." lon="..." alt="..."
///                parameter1="0" parameter2="0" parameter3="0" flag="0"/>
/// </mission>
/// ```
///
/// Coordinates and altitudes are written with `f64` `Display`, so whole
/// values lose their trailing ".0" (41.0 becomes "41") - the formatting other
/// tooling in this format's ecosystem produces. Serializing a well-formed
/// mission cannot fail.
pub fn mission_to_xml(mission: &Mission) -> String {
    let mut out = String::new();
    out.push_str("<mission>\n");
    out.push_str("  <version value=\"2.3-pre8\"/>\n");
    out.push_str(&format!(
        "  <mwp cx=\"{}\" cy=\"{}\" home-x=\"0\" home-y=\"0\" zoom=\"{}\"/>\n",
        mission.center.lon, mission.center.lat, mission.zoom
    ));

    for (i, wp) in mission.waypoints.iter().enumerate() {
        out.push_str(&format!(
            "  <missionitem no=\"{}\" action=\"{}\" lat=\"{}\" lon=\"{}\" alt=\"{}\" parameter1=\"0\" parameter2=\"0\" parameter3=\"0\" flag=\"{}\"/>\n",
            i + 1,
            wp.action.action_attr(),
            wp.position.lat,
            wp.position.lon,
            wp.altitude_m,
            wp.action.flag()
        ));
    }

    out.push_str("</mission>\n");
    out
}

/// Write the mission XML to a file.
pub fn write_mission_xml(path: &Path, mission: &Mission) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create mission file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(mission_to_xml(mission).as_bytes())?;
    writer.flush()?;
    Ok(())
}
