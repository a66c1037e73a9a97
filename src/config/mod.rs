use serde::Deserialize;
use std::path::PathBuf;

fn default_spacing() -> f64 {
    50.0
}
fn default_altitude() -> f64 {
    3.0
}
fn default_zoom() -> u32 {
    18
}
fn default_verbose() -> bool {
    false
}

/// Optional TOML configuration file. CLI flags win over file values.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub polygon: Option<PathBuf>,
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    #[serde(default = "default_altitude")]
    pub altitude: f64,
    #[serde(default)]
    pub center_lat: Option<f64>,
    #[serde(default)]
    pub center_lon: Option<f64>,
    #[serde(default = "default_zoom")]
    pub zoom: u32,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub land_at_end: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polysweep.toml"));
    paths.push(PathBuf::from(".polysweep.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polysweep").join("config.toml"));
        paths.push(config_dir.join("polysweep.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polysweep.toml"));
        paths.push(home.join(".config").join("polysweep").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            polygon = "area.json"
            spacing = 40.0
            altitude = 5.0
            center_lat = 41.8721
            center_lon = -87.7878
            zoom = 17
            output = "survey.xml"
            land_at_end = true
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.polygon, Some(PathBuf::from("area.json")));
        assert_eq!(config.spacing, 40.0);
        assert_eq!(config.altitude, 5.0);
        assert_eq!(config.center_lat, Some(41.8721));
        assert_eq!(config.zoom, 17);
        assert!(config.land_at_end);
        assert!(!config.verbose);
    }

    #[test]
    fn test_defaults_for_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert_eq!(config.spacing, 50.0);
        assert_eq!(config.altitude, 3.0);
        assert_eq!(config.zoom, 18);
        assert!(config.polygon.is_none());
        assert!(!config.land_at_end);
    }
}
