//! `windfarm`: route questions and read pre-computed wind farm results from the shell.
//!
//! Output is pretty JSON on stdout; logs go to stderr.

use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use windfarm_data::{DataCategory, DataReader};
use windfarm_router::{Intent, QueryRouter, Settings};

mod validate;

#[derive(Parser)]
#[command(name = "windfarm")]
#[command(about = "Wind farm analytics guidance and pre-computed results", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Processed data directory (overrides WINDFARM_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Prompt fragment directory (overrides WINDFARM_PROMPTS_DIR)
    #[arg(long, global = true)]
    prompts_dir: Option<PathBuf>,

    /// Project status JSON (overrides WINDFARM_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a question and print guidance plus attached data
    Route {
        query: String,

        /// Force an analysis type instead of classifying (e.g. power_curve)
        #[arg(long)]
        pattern_type: Option<Intent>,
    },

    /// Read one data category, for a farm or aggregated
    Fetch {
        category: DataCategory,

        #[arg(long)]
        farm: Option<String>,
    },

    /// List farms present in identifier columns
    Farms,

    /// Per-category file presence, size and shape
    Summary,

    /// Check data dir, tables, config and prompt fragments
    Validate,
}

impl Cli {
    fn settings(&self) -> Settings {
        let mut settings = Settings::from_env();
        if let Some(dir) = &self.data_dir {
            settings = settings.with_data_dir(dir);
        }
        if let Some(dir) = &self.prompts_dir {
            settings = settings.with_prompts_dir(dir);
        }
        if let Some(path) = &self.config {
            settings = settings.with_config_path(path);
        }
        settings
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}").context("write stdout")?;
    Ok(())
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let settings = cli.settings();
    log::debug!("Settings: {settings:?}");

    match &cli.command {
        Commands::Route {
            query,
            pattern_type,
        } => {
            let router = QueryRouter::new(&settings).context("failed to build query router")?;
            print_json(&router.analyze(query, *pattern_type))?;
        }
        Commands::Fetch { category, farm } => {
            let reader = DataReader::new(&settings.data_dir);
            print_json(&reader.fetch(*category, farm.as_deref()).to_value())?;
        }
        Commands::Farms => {
            let reader = DataReader::new(&settings.data_dir);
            print_json(&reader.available_wind_farms())?;
        }
        Commands::Summary => {
            let reader = DataReader::new(&settings.data_dir);
            print_json(&reader.data_summary())?;
        }
        Commands::Validate => {
            let report = validate::validate(&settings);
            print_json(&report)?;
            if !report.ok {
                log::error!("Data directory not found: {}", settings.data_dir.display());
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    run(&cli)
}
