mod cli;
mod commands;
mod config;
mod data;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::data::DataManager;
use crate::error::{CliError, Result};
use clap::Parser;
use itim_data::core::catalog::registry::DatasetCatalog;
use std::io::{self, Write};
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 itim-data CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = config::load(&cli)?;
    let manager = DataManager::new(config.data_dir.clone());
    let mut stdout = io::stdout().lock();

    let command_result = match &cli.command {
        Commands::List(args) => {
            info!("Dispatching to 'list' command.");
            let catalog = load_catalog(&manager, &config)?;
            commands::list::run(args, &catalog, &mut stdout)
        }
        Commands::Show(args) => {
            info!("Dispatching to 'show' command.");
            let catalog = load_catalog(&manager, &config)?;
            commands::show::run(args, &catalog, &mut stdout)
        }
        Commands::Radii(args) => {
            info!("Dispatching to 'radii' command.");
            let catalog = load_catalog(&manager, &config)?;
            commands::radii::run(args, &catalog, config.length_unit, &mut stdout)
        }
        Commands::Data(args) => {
            info!("Dispatching to 'data' command.");
            commands::data::run(args, &manager, &mut stdout)
        }
    };
    stdout.flush()?;

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}

fn load_catalog(manager: &DataManager, config: &AppConfig) -> Result<DatasetCatalog> {
    manager.build_catalog(config.manifest.as_deref())
}
