use crate::error::Result;
use crate::model::Priority;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Session options, stored in `<config dir>/config.json`.
///
/// Tasks themselves are never written anywhere; this only shapes how a session starts
/// and how the terminal adapter behaves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TasklistConfig {
    /// Priority used by `add` when none is given
    #[serde(default)]
    pub default_priority: Priority,

    /// Load the demo tasks when a session starts
    #[serde(default)]
    pub seed_samples: bool,

    /// Ask before clear-done / clear-all
    #[serde(default = "default_confirm_clear")]
    pub confirm_clear: bool,
}

fn default_confirm_clear() -> bool {
    true
}

impl Default for TasklistConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::Normal,
            seed_samples: false,
            confirm_clear: default_confirm_clear(),
        }
    }
}

impl TasklistConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TasklistConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}
