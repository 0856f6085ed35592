//! Output formatting for quicktask.
//!
//! This module provides formatters for displaying parsed tasks in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::QuickTaskError;
use crate::features::nlp::ParsedTask;
use crate::features::tasks::TaskList;

pub use json::*;
pub use pretty::*;

/// Format one parsed task based on output format
///
/// # Errors
///
/// Returns `QuickTaskError::Json` if JSON serialization fails.
pub fn format_parsed(task: &ParsedTask, format: OutputFormat) -> Result<String, QuickTaskError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_pretty(task)),
        OutputFormat::Json => format_parsed_json(task),
    }
}

/// Format transcript tasks based on output format
///
/// # Errors
///
/// Returns `QuickTaskError::Json` if JSON serialization fails.
pub fn format_extracted(
    tasks: &[ParsedTask],
    format: OutputFormat,
) -> Result<String, QuickTaskError> {
    match format {
        OutputFormat::Pretty => Ok(format_extracted_pretty(tasks)),
        OutputFormat::Json => format_extracted_json(tasks),
    }
}

/// Format a task list based on output format
///
/// # Errors
///
/// Returns `QuickTaskError::Json` if JSON serialization fails.
pub fn format_task_list(list: &TaskList, format: OutputFormat) -> Result<String, QuickTaskError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_list_pretty(list)),
        OutputFormat::Json => format_task_list_json(list),
    }
}
