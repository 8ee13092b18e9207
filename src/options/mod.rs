//! Centralized editor options with TOML preset support.
//!
//! All tweakable settings (camera fly speeds, hemisphere lighting, selection
//! outline, gizmo/orbit controls, movement keybindings) are consolidated
//! here. Options serialize to/from TOML so hosts can ship presets.

mod camera;
mod controls;
mod keybindings;
mod lighting;
mod post_processing;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::{ControlsOptions, GizmoMode, OrbitAction, OrbitButtons};
pub use keybindings::{KeybindingOptions, MoveAction};
pub use lighting::LightingOptions;
pub use post_processing::OutlineOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and fly-control parameters.
    pub camera: CameraOptions,
    /// Hemisphere light parameters.
    pub lighting: LightingOptions,
    /// Selection outline styling.
    pub outline: OutlineOptions,
    /// Gizmo and orbit-controls settings.
    pub controls: ControlsOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, EditorError> {
        let content = std::fs::read_to_string(path).map_err(EditorError::Io)?;
        toml::from_str(&content)
            .map_err(|e| EditorError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), EditorError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EditorError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(EditorError::Io)?;
        }
        std::fs::write(path, content).map_err(EditorError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
