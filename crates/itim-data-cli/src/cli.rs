use clap::{Args, Parser, Subcommand};
use itim_data::core::catalog::entry::DataType;
use itim_data::core::forcefield::radii::LengthUnit;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "itim-data CLI - Browse the bundled sample datasets and compute van-der-Waals radii from GROMACS topologies.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the bundled sample files, overriding the config file.
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Additional dataset manifest to register, overriding the config file.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered datasets.
    List(ListArgs),
    /// Show the classification of a dataset, looked up by label or path.
    Show(ShowArgs),
    /// Compute van-der-Waals radii from a GROMACS topology dataset.
    Radii(RadiiArgs),
    /// Inspect the local data directory.
    Data(DataArgs),
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list datasets of this type (config, topol, traj).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub data_type: Option<DataType>,

    /// Include private test fixtures (labels starting with '_').
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Dataset label (e.g., 'WATER_GRO') or resolved path.
    #[arg(required = true, value_name = "LABEL_OR_PATH")]
    pub key: String,
}

/// Arguments for the `radii` subcommand.
#[derive(Args, Debug)]
pub struct RadiiArgs {
    /// Topology dataset label (e.g., 'G43A1_TOP') or resolved path.
    #[arg(required = true, value_name = "LABEL_OR_PATH")]
    pub key: String,

    /// Length unit of the reported radii (angstrom, nanometer).
    #[arg(short, long, value_name = "UNIT")]
    pub unit: Option<LengthUnit>,
}

/// Arguments for the `data` subcommand.
#[derive(Args, Debug)]
pub struct DataArgs {
    #[command(subcommand)]
    pub command: DataCommands,
}

/// Available commands for data directory inspection.
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Show the absolute path to the local data directory.
    Path,
}
