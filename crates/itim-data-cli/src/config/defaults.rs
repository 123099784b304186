use itim_data::core::forcefield::radii::LengthUnit;
use std::path::PathBuf;

/// Directory name used when no platform data directory can be determined.
pub const FALLBACK_DATA_DIR: &str = "data";

pub struct DefaultsConfig {
    pub length_unit: LengthUnit,
    pub fallback_data_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            length_unit: LengthUnit::Angstrom,
            fallback_data_dir: PathBuf::from(FALLBACK_DATA_DIR),
        }
    }
}
