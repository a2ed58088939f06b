use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Layout area the default table radius is derived from.
    #[serde(default = "default_table_width")]
    pub table_width: f32,
    #[serde(default = "default_table_height")]
    pub table_height: f32,
    /// Populate an empty roster with the seed names at launch.
    #[serde(default)]
    pub seed_on_start: bool,
}

fn default_table_width() -> f32 {
    800.0
}

fn default_table_height() -> f32 {
    600.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            table_width: default_table_width(),
            table_height: default_table_height(),
            seed_on_start: false,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        confy::load("grimoire", None).unwrap_or_default()
    }

    /// Persist the settings; a failed write is logged, not surfaced.
    pub fn save(self) {
        if let Err(err) = confy::store("grimoire", None, self) {
            tracing::warn!(error = %err, "Failed to save configuration");
        }
    }

    /// Location of the persisted settings file, if resolvable.
    pub fn path() -> Option<PathBuf> {
        confy::get_configuration_file_path("grimoire", None).ok()
    }
}
