//! Menu configuration
//!
//! Tunable behavior knobs (hover delays, placement offsets) loaded from a
//! TOML file. Missing files fall back to defaults so embedding applications
//! work with zero configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

fn default_hover_open_delay_ms() -> u64 {
    240
}

fn default_hover_close_delay_ms() -> u64 {
    240
}

fn default_root_x_offset() -> i32 {
    2
}

fn default_max_label_width() -> usize {
    40
}

/// Behavior configuration for the menu controller
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Delay before a hovered folder row opens its sub-menu
    #[serde(default = "default_hover_open_delay_ms")]
    pub hover_open_delay_ms: u64,

    /// Delay before sub-menus close after hovering a non-folder sibling
    #[serde(default = "default_hover_close_delay_ms")]
    pub hover_close_delay_ms: u64,

    /// Horizontal offset applied to the root anchor so the pointer lands
    /// inside the opened menu
    #[serde(default = "default_root_x_offset")]
    pub root_x_offset: i32,

    /// Labels longer than this are truncated when measuring the panel
    #[serde(default = "default_max_label_width")]
    pub max_label_width: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            hover_open_delay_ms: default_hover_open_delay_ms(),
            hover_close_delay_ms: default_hover_close_delay_ms(),
            root_x_offset: default_root_x_offset(),
            max_label_width: default_max_label_width(),
        }
    }
}

impl MenuConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let config: MenuConfig = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn hover_open_delay(&self) -> Duration {
        Duration::from_millis(self.hover_open_delay_ms)
    }

    pub fn hover_close_delay(&self) -> Duration {
        Duration::from_millis(self.hover_close_delay_ms)
    }
}
