//! Natural language parsing for task entry.
//!
//! This module provides parsing for free-form input like:
//! - "Finish landing page Aman by 11pm 20th June P1"
//! - "Call client tomorrow 5pm"
//! - "Aman you take the landing page by 10pm tomorrow. Priya please review the PR before friday."

mod parser;
mod task;
mod transcript;

pub use parser::{
    assignee_pass, date_pass, parse_task, parse_task_on, priority_pass, time_pass, Pass,
    ParseState, PASSES,
};
pub use task::{
    collapse_whitespace, is_name_token, ExtractedFields, ParsedTask, Priority, PLACEHOLDER_TITLE,
    STOP_WORDS,
};
pub use transcript::{extract_tasks, extract_tasks_on, split_sentences, MIN_DESCRIPTION_LEN};
