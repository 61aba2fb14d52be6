//! Load and save the area configuration document.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CadastreError, Result};

use super::model::{AreaDefinition, ProjectConfig};

/// On-disk shape of the configuration: a `[general]` section plus one
/// `[areas.<name>]` table per area.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    general: GeneralSection,
    #[serde(default)]
    areas: IndexMap<String, AreaDefinition>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GeneralSection {
    #[serde(default)]
    project_name: String,
    #[serde(default)]
    default_prompt: String,
}

impl ProjectConfig {
    /// Load a configuration from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist. Malformed content is
    /// an explicit [`CadastreError::ConfigParse`]; callers that want the
    /// lenient behavior log it and proceed as if no configuration exists.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(path).map_err(|e| CadastreError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let doc: ConfigDocument =
            toml::from_str(&raw).map_err(|e| CadastreError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Some(Self {
            project_name: doc.general.project_name,
            default_prompt: doc.general.default_prompt,
            areas: doc.areas,
        }))
    }

    /// Save the configuration to `path`, overwriting any existing file.
    ///
    /// Round-trips: `load(save(x))` is field-for-field equal to `x`,
    /// including pattern order.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| CadastreError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let doc = ConfigDocument {
            general: GeneralSection {
                project_name: self.project_name.clone(),
                default_prompt: self.default_prompt.clone(),
            },
            areas: self.areas.clone(),
        };

        let rendered = toml::to_string_pretty(&doc)
            .map_err(|e| CadastreError::Config(format!("Failed to serialize configuration: {}", e)))?;

        fs::write(path, rendered).map_err(|e| CadastreError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Pick the guidance text for a summarization run.
///
/// Precedence: the explicit prompt wins when there is no configuration or no
/// area name; a known area's prompt wins next; anything else falls back to
/// the configuration's default prompt. Callers rely on this order to pick
/// the correct guidance text for downstream processing.
pub fn resolve_prompt(
    config: Option<&ProjectConfig>,
    area: Option<&str>,
    explicit_prompt: &str,
) -> String {
    let (config, area) = match (config, area) {
        (Some(config), Some(area)) => (config, area),
        _ => return explicit_prompt.to_string(),
    };

    match config.areas.get(area) {
        Some(definition) => definition.prompt.clone(),
        None => config.default_prompt.clone(),
    }
}
