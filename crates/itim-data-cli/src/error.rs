use itim_data::core::catalog::manifest::ManifestError;
use itim_data::core::catalog::registry::CatalogError;
use itim_data::workflows::radii::RadiiError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Radii(#[from] RadiiError),

    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use itim_data::core::catalog::entry::{DataFormat, DataType};
    use itim_data::core::catalog::manifest::CatalogManifest;

    #[test]
    fn catalog_errors_are_displayed_unchanged() {
        let err: CliError = CatalogError::NotFound {
            key: "OPLS_TOP".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "No dataset registered under label or path 'OPLS_TOP'"
        );
    }

    #[test]
    fn unsupported_format_keeps_classification_in_message() {
        let err: CliError = RadiiError::UnsupportedFormat {
            key: "WATER_GRO".to_string(),
            data_type: DataType::Config,
            format: DataFormat::Gro,
        }
        .into();
        let message = err.to_string();
        assert!(message.contains("WATER_GRO"));
        assert!(message.contains("config/GRO"));
    }

    #[test]
    fn manifest_errors_carry_the_manifest_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err: CliError = CatalogManifest::load(&path).unwrap_err().into();
        assert!(matches!(err, CliError::Manifest(_)));
        assert!(err.to_string().contains("absent.toml"));
    }
}
