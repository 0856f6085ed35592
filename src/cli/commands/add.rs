//! Add command implementation.
//!
//! This module implements `quicktask add`: parse several lines into a fresh
//! task list and print it.

use std::io::{self, BufRead};

use chrono::NaiveDate;

use super::parse::read_file;
use crate::cli::args::{AddArgs, OutputFormat};
use crate::error::QuickTaskError;
use crate::features::nlp::{extract_tasks_on, parse_task_on};
use crate::features::tasks::TaskList;
use crate::output::format_task_list;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if there is nothing to add, a `--complete` position is
/// out of range, input cannot be read, or output formatting fails.
pub fn add(args: AddArgs, today: NaiveDate, format: OutputFormat) -> Result<String, QuickTaskError> {
    let mut lines = args.texts;
    if args.stdin {
        for line in io::stdin().lock().lines() {
            lines.push(line?);
        }
    }

    let mut list = TaskList::new();
    build_list(&mut list, &lines, today);

    if let Some(path) = &args.transcript {
        let text = read_file(path)?;
        list.add_all(extract_tasks_on(&text, today));
    }

    if list.is_empty() {
        return Err(QuickTaskError::InvalidInput(
            "No task text given (pass TEXT, --stdin or --transcript)".to_string(),
        ));
    }

    complete_positions(&mut list, &args.complete)?;
    format_task_list(&list, format)
}

/// Parse each non-blank line and add it to the top of `list`.
pub fn build_list<S: AsRef<str>>(list: &mut TaskList, lines: &[S], today: NaiveDate) {
    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        list.add(parse_task_on(line, today));
    }
}

/// Mark tasks done by their 1-based position in the list.
///
/// # Errors
///
/// Returns `QuickTaskError::InvalidInput` if a position is out of range.
pub fn complete_positions(list: &mut TaskList, positions: &[usize]) -> Result<(), QuickTaskError> {
    let ids = positions
        .iter()
        .map(|&n| {
            n.checked_sub(1)
                .and_then(|i| list.tasks().get(i))
                .map(|t| t.id.clone())
                .ok_or_else(|| {
                    QuickTaskError::InvalidInput(format!(
                        "No task at position {n} (list has {})",
                        list.len()
                    ))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for id in ids {
        list.complete(&id)?;
    }
    Ok(())
}
