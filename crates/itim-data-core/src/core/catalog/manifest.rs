use super::entry::{DataFormat, DataType};
use super::registry::{CatalogError, DatasetCatalog};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    pub label: String,
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub data_type: DataType,
    pub format: DataFormat,
    #[serde(default)]
    pub description: String,
}

/// Extra datasets declared in a TOML file, one `[[dataset]]` table per entry.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogManifest {
    #[serde(default, rename = "dataset")]
    pub datasets: Vec<ManifestEntry>,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl CatalogManifest {
    /// Loads a manifest, resolving relative dataset paths against its directory.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mut manifest: CatalogManifest =
            toml::from_str(&content).map_err(|e| ManifestError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for entry in &mut manifest.datasets {
            if entry.path.is_relative() {
                entry.path = base.join(&entry.path);
            }
        }
        Ok(manifest)
    }

    /// Registers every entry in declaration order, stopping at the first invalid label.
    pub fn register_into(&self, catalog: &mut DatasetCatalog) -> Result<usize, CatalogError> {
        for entry in &self.datasets {
            catalog.register(
                &entry.label,
                &entry.path.to_string_lossy(),
                entry.data_type,
                entry.format,
                &entry.description,
            )?;
        }
        Ok(self.datasets.len())
    }
}
