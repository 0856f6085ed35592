use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use quicktask::cli::args::{Cli, Commands};
use quicktask::cli::commands;
use quicktask::config::{Config, Paths};
use quicktask::core::today;
use quicktask::error::QuickTaskError;
use quicktask::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        let code = e
            .downcast_ref::<QuickTaskError>()
            .map_or(1, QuickTaskError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = cli
        .config
        .clone()
        .map_or_else(Paths::default, Paths::from_config_file);
    let config = Config::load_from_path(&paths.config_file)
        .with_context(|| format!("loading {}", paths.config_file.display()))?;

    config.general.color.apply();
    logging::init(cli.verbose, &config.logging.level)?;

    let format = cli.output.unwrap_or(config.general.default_output);
    let today = cli.today.unwrap_or_else(today);
    tracing::debug!(%today, ?format, "starting");

    let output = match cli.command {
        Commands::Parse { text } => commands::parse(&text, today, format)?,
        Commands::Transcript(args) => commands::transcript(args, today, format)?,
        Commands::Add(args) => commands::add(args, today, format)?,
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
        Commands::Config(args) => commands::config(&paths, &config, args.command)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
