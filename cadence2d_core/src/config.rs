//! World configuration loaded from YAML or TOML files.

use crate::error::{CadenceError, CadenceResult};
use serde::Deserialize;

/// Startup configuration for a [`crate::World`].
///
/// Every field has a default so partial config files work. Gravity is in
/// display coordinates (y-down, m/s²); distances elsewhere in the crate are
/// display pixels.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldConfig {
    /// Gravity vector, display convention (positive y pulls down-screen).
    #[serde(default = "default_gravity")]
    pub gravity: [f32; 2],

    /// Whether the engine may put resting bodies to sleep.
    #[serde(default = "default_true")]
    pub allow_sleeping: bool,

    /// Seconds advanced by one physics quantum.
    #[serde(default = "default_time_step")]
    pub time_step: f32,

    /// Solver velocity iterations per step.
    #[serde(default = "default_iterations")]
    pub velocity_iterations: u32,

    /// Solver position iterations per step.
    #[serde(default = "default_iterations")]
    pub position_iterations: u32,

    /// Target wake-up interval in milliseconds. Advisory: it governs how
    /// often a driver loop should tick the world, not the physics quantum.
    #[serde(default = "default_frame_time")]
    pub frame_time: u64,

    /// Whether to measure and report wake-ups per second.
    #[serde(default)]
    pub report_fps: bool,
}

fn default_gravity() -> [f32; 2] {
    [0.0, 10.0]
}

fn default_true() -> bool {
    true
}

fn default_time_step() -> f32 {
    1.0 / 60.0
}

fn default_iterations() -> u32 {
    10
}

fn default_frame_time() -> u64 {
    1000 / 60
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            allow_sleeping: true,
            time_step: default_time_step(),
            velocity_iterations: default_iterations(),
            position_iterations: default_iterations(),
            frame_time: default_frame_time(),
            report_fps: false,
        }
    }
}

impl WorldConfig {
    /// Load a config file, auto-detecting the format from the extension.
    pub fn load(path: &str) -> CadenceResult<Self> {
        if path.ends_with(".toml") {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else if path.ends_with(".yaml") || path.ends_with(".yml") {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Err(CadenceError::UnknownFormat(path.to_string()))
        }
    }
}
