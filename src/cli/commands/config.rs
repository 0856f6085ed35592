//! Config command implementation.

use crate::cli::args::ConfigCommands;
use crate::config::{Config, Paths};
use crate::error::QuickTaskError;

/// Execute config subcommands.
///
/// `config` is the configuration already loaded for this run.
///
/// # Errors
///
/// Returns an error if the file already exists and `--force` was not given,
/// or if the file cannot be written.
pub fn config(
    paths: &Paths,
    config: &Config,
    cmd: ConfigCommands,
) -> Result<String, QuickTaskError> {
    match cmd {
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Show => Ok(serde_yaml::to_string(config)?),
        ConfigCommands::Init { force } => {
            if paths.config_file.exists() && !force {
                return Err(QuickTaskError::InvalidInput(format!(
                    "Config file {} already exists (use --force to overwrite)",
                    paths.config_file.display()
                )));
            }
            paths.ensure_dirs()?;
            Config::default().save_to_path(&paths.config_file)?;
            Ok(format!("Wrote {}", paths.config_file.display()))
        }
    }
}
