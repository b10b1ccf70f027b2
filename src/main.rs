use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use climblog::console::{Console, styler_for};
use climblog::menu::MenuController;
use config::Config;

fn setup_logging(config: &Config, verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("climblog")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("climblog.log");

    // The console belongs to the menu, so logs go to a file
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application, output dir: {}", config.output.dir.display());

    if cli.is_verbose() {
        println!("{}", "Verbose logging enabled".yellow());
    }

    let color = cli.use_color(config.output.color);
    if !color {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout(), styler_for(color));
    let mut menu = MenuController::new(console, config.output.dir.clone());
    menu.run().context("Menu loop failed")?;

    info!("Exiting normally");
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging once the configured level is known
    setup_logging(&config, cli.is_verbose()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
