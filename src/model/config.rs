use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from the optional `--config` TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides for theme slots, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Upper bound for the duration +/- keys (the form's input range)
    #[serde(default = "default_duration_max")]
    pub duration_max: u32,
    /// Minutes added or removed per +/- press on the duration field
    #[serde(default = "default_duration_step")]
    pub duration_step: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            duration_max: default_duration_max(),
            duration_step: default_duration_step(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_duration_max() -> u32 {
    120
}

fn default_duration_step() -> u32 {
    5
}
