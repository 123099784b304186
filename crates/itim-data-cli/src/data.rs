use crate::config::DefaultsConfig;
use crate::error::Result;
use directories::ProjectDirs;
use itim_data::core::catalog::bundled;
use itim_data::core::catalog::manifest::CatalogManifest;
use itim_data::core::catalog::registry::DatasetCatalog;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        let path = custom_path.unwrap_or_else(Self::get_default_data_path);
        debug!("DataManager initialized with path: {:?}", &path);
        Self::with_custom_path(path)
    }

    pub fn with_custom_path(path: PathBuf) -> Self {
        Self { base_path: path }
    }

    pub fn get_data_path(&self) -> &Path {
        &self.base_path
    }

    /// Registers the bundled samples under the data path, then any manifest entries.
    ///
    /// Manifest entries win over bundled entries with the same label.
    pub fn build_catalog(&self, manifest: Option<&Path>) -> Result<DatasetCatalog> {
        let mut catalog = DatasetCatalog::new();
        bundled::register_bundled(&mut catalog, &self.base_path)?;
        debug!("Registered {} bundled datasets.", catalog.len());

        if let Some(path) = manifest {
            info!("Loading dataset manifest from {:?}", path);
            let count = CatalogManifest::load(path)?.register_into(&mut catalog)?;
            debug!("Registered {} datasets from manifest.", count);
        }

        if !self.base_path.exists() {
            warn!(
                "Data directory {:?} does not exist; bundled paths will not resolve to files.",
                &self.base_path
            );
        }
        Ok(catalog)
    }

    fn get_default_data_path() -> PathBuf {
        ProjectDirs::from("org", "itim", "itim-data")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                let fallback = DefaultsConfig::default().fallback_data_dir;
                warn!(
                    "Could not determine default data directory, falling back to {:?}.",
                    &fallback
                );
                fallback
            })
    }
}
