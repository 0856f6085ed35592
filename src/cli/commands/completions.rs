//! Completions command implementation.

use clap_complete::Shell;

use crate::error::QuickTaskError;
use crate::features::shell::completions::{completion_install_instructions, generate_completions};

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the completion script cannot be generated.
pub fn completions(shell: Shell, install: bool) -> Result<String, QuickTaskError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_shows_instructions() {
        let out = completions(Shell::Fish, true).unwrap();
        assert!(out.contains("quicktask completions fish"));
    }

    #[test]
    fn test_script_generation() {
        let out = completions(Shell::Bash, false).unwrap();
        assert!(out.contains("quicktask"));
    }
}
