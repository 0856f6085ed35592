//! quicktask - natural-language task parsing
//!
//! This crate turns free-form lines like "Finish landing page Aman by 11pm
//! 20th June P1" into structured tasks, and pulls assignment-style tasks out
//! of meeting transcripts.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::QuickTaskError;
pub use features::nlp::{extract_tasks, parse_task, ParsedTask, Priority};
pub use features::tasks::{Task, TaskList};
