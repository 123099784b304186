use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Labels starting with this prefix are reserved for internal test fixtures.
pub const PRIVATE_LABEL_PREFIX: char = '_';

/// The role a sample file plays in an analysis.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// A single-frame configuration (coordinates).
    #[serde(alias = "conf")]
    Config,
    /// A force-field topology.
    Topol,
    /// A multi-frame trajectory.
    Traj,
}

/// The on-disk format of a sample file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataFormat {
    Gro,
    Xtc,
    Gmx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn of_label(label: &str) -> Self {
        if label.starts_with(PRIVATE_LABEL_PREFIX) {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// Classification metadata for one registered sample file.
///
/// Entries are immutable once built: the catalog only ever replaces them
/// wholesale on re-registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    label: String,
    path: String,
    data_type: DataType,
    format: DataFormat,
    description: String,
}

impl CatalogEntry {
    pub(crate) fn new(
        label: impl Into<String>,
        path: impl Into<String>,
        data_type: DataType,
        format: DataFormat,
        description: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            data_type,
            format,
            description: description.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn format(&self) -> DataFormat {
        self.format
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::of_label(&self.label)
    }

    pub fn is_public(&self) -> bool {
        self.visibility() == Visibility::Public
    }

    /// Whether this entry is a GROMACS topology, the only kind radii can be extracted from.
    pub fn is_gromacs_topology(&self) -> bool {
        self.data_type == DataType::Topol && self.format == DataFormat::Gmx
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Config => "config",
            DataType::Topol => "topol",
            DataType::Traj => "traj",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataFormat::Gro => "GRO",
            DataFormat::Xtc => "XTC",
            DataFormat::Gmx => "GMX",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown data type '{0}'. Expected one of: config, topol, traj.")]
pub struct ParseDataTypeError(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown data format '{0}'. Expected one of: GRO, XTC, GMX.")]
pub struct ParseDataFormatError(String);

impl FromStr for DataType {
    type Err = ParseDataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "config" | "conf" => Ok(DataType::Config),
            "topol" => Ok(DataType::Topol),
            "traj" => Ok(DataType::Traj),
            _ => Err(ParseDataTypeError(s.to_string())),
        }
    }
}

impl FromStr for DataFormat {
    type Err = ParseDataFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GRO" => Ok(DataFormat::Gro),
            "XTC" => Ok(DataFormat::Xtc),
            "GMX" => Ok(DataFormat::Gmx),
            _ => Err(ParseDataFormatError(s.to_string())),
        }
    }
}
