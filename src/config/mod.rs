use serde::Deserialize;
use std::path::PathBuf;

use crate::geometry::HullStrategy;
use crate::io::Resolution;

/// Baked-in pipeline defaults.
///
/// Areas are square kilometers measured on the EPSG:3395 plane. The default
/// band keeps mid-sized islands: large enough to matter for a world-scale
/// boundary, small enough to leave out the continents. Alpha is in inverse
/// degrees, tolerance in square degrees of triangle area.
pub mod defaults {
    use crate::geometry::HullStrategy;
    use crate::io::Resolution;

    pub const RESOLUTION: Resolution = Resolution::Intermediate;
    pub const MIN_AREA_KM2: f64 = 300.0;
    pub const MAX_AREA_KM2: f64 = 10_000.0;
    pub const ALPHA: f64 = 0.1;
    pub const TOLERANCE: f64 = 0.01;
    pub const HULL: HullStrategy = HullStrategy::Alpha;
}

fn default_resolution() -> Resolution {
    defaults::RESOLUTION
}
fn default_min_area() -> f64 {
    defaults::MIN_AREA_KM2
}
fn default_max_area() -> f64 {
    defaults::MAX_AREA_KM2
}
fn default_alpha() -> f64 {
    defaults::ALPHA
}
fn default_tolerance() -> f64 {
    defaults::TOLERANCE
}
fn default_hull() -> HullStrategy {
    defaults::HULL
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_resolution")]
    pub resolution: Resolution,
    #[serde(default = "default_min_area")]
    pub min_area: f64,
    #[serde(default = "default_max_area")]
    pub max_area: f64,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_hull")]
    pub hull: HullStrategy,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            min_area: default_min_area(),
            max_area: default_max_area(),
            alpha: default_alpha(),
            tolerance: default_tolerance(),
            hull: default_hull(),
            data_dir: None,
            out_dir: None,
            verbose: default_verbose(),
        }
    }
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

    paths.push(PathBuf::from("oceanhull.toml"));
    paths.push(PathBuf::from(".oceanhull.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("oceanhull").join("config.toml"));
        paths.push(config_dir.join("oceanhull.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".oceanhull.toml"));
        paths.push(home.join(".config").join("oceanhull").join("config.toml"));
    }

    paths
}
