//! Parse and transcript command implementations.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use crate::cli::args::{OutputFormat, TranscriptArgs};
use crate::error::QuickTaskError;
use crate::features::nlp::{extract_tasks_on, parse_task_on};
use crate::output::{format_extracted, format_parsed};

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse(text: &str, today: NaiveDate, format: OutputFormat) -> Result<String, QuickTaskError> {
    let task = parse_task_on(text, today);
    format_parsed(&task, format)
}

/// Execute the transcript command.
///
/// # Errors
///
/// Returns an error if the transcript cannot be read or output formatting fails.
pub fn transcript(
    args: TranscriptArgs,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, QuickTaskError> {
    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) if path != Path::new("-") => read_file(&path)?,
        (None, _) => read_stdin()?,
    };

    let tasks = extract_tasks_on(&text, today);
    format_extracted(&tasks, format)
}

/// Read a transcript file.
///
/// # Errors
///
/// Returns `QuickTaskError::InvalidInput` if the file cannot be read.
pub fn read_file(path: &Path) -> Result<String, QuickTaskError> {
    std::fs::read_to_string(path).map_err(|e| {
        QuickTaskError::InvalidInput(format!("Failed to read {}: {e}", path.display()))
    })
}

fn read_stdin() -> Result<String, QuickTaskError> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
