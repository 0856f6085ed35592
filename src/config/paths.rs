//! Path resolution for quicktask configuration.
//!
//! quicktask keeps its settings in `~/.quicktask/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::QuickTaskError;

/// Paths to quicktask configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.quicktask/`
    pub root: PathBuf,
    /// Config file: `~/.quicktask/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, QuickTaskError> {
        let home = std::env::var("HOME").map_err(|_| {
            QuickTaskError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".quicktask")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Use an explicit config file; its parent directory becomes the root.
    #[must_use]
    pub fn from_config_file(config_file: PathBuf) -> Self {
        let root = config_file
            .parent()
            .map(std::path::Path::to_path_buf)
            .unwrap_or_default();
        Self { root, config_file }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), QuickTaskError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                QuickTaskError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".quicktask"))
        })
    }
}
