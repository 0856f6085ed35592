//! JSON output formatting for quicktask.

use serde::Serialize;
use serde_json::json;

use crate::error::QuickTaskError;
use crate::features::nlp::ParsedTask;
use crate::features::tasks::TaskList;

/// Format a single parsed task as JSON
///
/// # Errors
///
/// Returns `QuickTaskError::Json` if JSON serialization fails.
pub fn format_parsed_json(task: &ParsedTask) -> Result<String, QuickTaskError> {
    to_json(task)
}

/// Format transcript tasks as JSON
///
/// # Errors
///
/// Returns `QuickTaskError::Json` if JSON serialization fails.
pub fn format_extracted_json(tasks: &[ParsedTask]) -> Result<String, QuickTaskError> {
    let output = json!({
        "count": tasks.len(),
        "items": tasks
    });
    to_json(&output)
}

/// Format a task list as JSON
///
/// # Errors
///
/// Returns `QuickTaskError::Json` if JSON serialization fails.
pub fn format_task_list_json(list: &TaskList) -> Result<String, QuickTaskError> {
    let output = json!({
        "count": list.len(),
        "pending": list.pending().count(),
        "items": list.tasks()
    });
    to_json(&output)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `QuickTaskError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, QuickTaskError> {
    Ok(serde_json::to_string_pretty(value)?)
}
