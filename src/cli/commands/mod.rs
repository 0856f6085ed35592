//! Command implementations for quicktask.
//!
//! Each command returns the text to print; `main` does the printing.

mod add;
mod completions;
mod config;
mod parse;

pub use add::{add, build_list, complete_positions};
pub use completions::completions;
pub use config::config;
pub use parse::{parse, read_file, transcript};
