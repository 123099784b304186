mod defaults;

pub use defaults::DefaultsConfig;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use itim_data::core::forcefield::radii::LengthUnit;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings as written in the config file; every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialAppConfig {
    data_dir: Option<PathBuf>,
    manifest: Option<PathBuf>,
    length_unit: Option<LengthUnit>,
}

/// Effective settings after merging CLI flags, the config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `None` lets the data manager pick the platform default.
    pub data_dir: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub length_unit: LengthUnit,
}

impl PartialAppConfig {
    /// Reads a config file. Relative paths inside it are taken relative to the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.data_dir = config.data_dir.map(|p| base.join(p));
        config.manifest = config.manifest.map(|p| base.join(p));
        Ok(config)
    }

    pub fn merge_with_cli(self, cli: &Cli, defaults: &DefaultsConfig) -> AppConfig {
        let cli_unit = match &cli.command {
            crate::cli::Commands::Radii(args) => args.unit,
            _ => None,
        };
        AppConfig {
            data_dir: cli.data_dir.clone().or(self.data_dir),
            manifest: cli.manifest.clone().or(self.manifest),
            length_unit: cli_unit.or(self.length_unit).unwrap_or(defaults.length_unit),
        }
    }
}

/// Builds the effective configuration for this invocation.
pub fn load(cli: &Cli) -> Result<AppConfig> {
    let partial = match &cli.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Configuration file does not exist: {}",
                    path.display()
                )));
            }
            PartialAppConfig::from_file(path)?
        }
        None => PartialAppConfig::default(),
    };
    let config = partial.merge_with_cli(cli, &DefaultsConfig::default());
    debug!("Effective configuration: {:?}", &config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["itim-data"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn defaults_apply_without_config_file() {
        let cli = parse(&["radii", "G43A1_TOP"]);
        let config = load(&cli).unwrap();
        assert_eq!(
            config,
            AppConfig {
                data_dir: None,
                manifest: None,
                length_unit: LengthUnit::Angstrom,
            }
        );
    }

    #[test]
    fn file_values_are_used_and_resolved_relative_to_the_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("itim.toml");
        fs::write(
            &config_path,
            r#"
            data-dir = "samples"
            manifest = "/etc/itim/extra.toml"
            length-unit = "nanometer"
            "#,
        )
        .unwrap();

        let cli = parse(&["-c", config_path.to_str().unwrap(), "radii", "G43A1_TOP"]);
        let config = load(&cli).unwrap();
        assert_eq!(config.data_dir, Some(dir.path().join("samples")));
        assert_eq!(config.manifest, Some(PathBuf::from("/etc/itim/extra.toml")));
        assert_eq!(config.length_unit, LengthUnit::Nanometer);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("itim.toml");
        fs::write(
            &config_path,
            "data-dir = \"samples\"\nlength-unit = \"nanometer\"\n",
        )
        .unwrap();

        let cli = parse(&[
            "-c",
            config_path.to_str().unwrap(),
            "--data-dir",
            "/opt/itim/data",
            "radii",
            "G43A1_TOP",
            "--unit",
            "angstrom",
        ]);
        let config = load(&cli).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/opt/itim/data")));
        assert_eq!(config.length_unit, LengthUnit::Angstrom);
    }

    #[test]
    fn unknown_key_is_a_parsing_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("itim.toml");
        fs::write(&config_path, "data-directory = \"samples\"\n").unwrap();

        let cli = parse(&["-c", config_path.to_str().unwrap(), "list"]);
        assert!(matches!(load(&cli), Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("absent.toml");
        let cli = parse(&["-c", config_path.to_str().unwrap(), "list"]);
        assert!(matches!(load(&cli), Err(CliError::Config(_))));
    }
}
