use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "quicktask")]
#[command(about = "Turn free-form task lines and meeting transcripts into structured tasks")]
#[command(long_about = "quicktask - natural language task capture

Parses a single task line or a whole meeting transcript into tasks with a
title, assignee, due date, due time and priority.

QUICK START:
  quicktask parse \"Finish landing page Aman by 11pm 20th June P1\"
  quicktask transcript notes.txt
  echo \"Call client tomorrow 5pm\" | quicktask add --stdin

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  quicktask <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file, or 'pretty'.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Resolve relative dates against this day instead of today (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the config file
    #[arg(long, global = true, env = "QUICKTASK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one task line
    ///
    /// Extracts priority, time, date and assignee from the line, in that
    /// order, and prints what is left as the title.
    ///
    /// # Examples
    ///
    ///   quicktask parse "Finish landing page Aman by 11pm 20th June P1"
    ///   quicktask parse "Call client tomorrow 5pm" -o json
    ///
    /// # Supported Patterns
    ///
    ///   Priority:   P1, P2, P3, P4 (default P3)
    ///   Times:      11:00 PM, 5pm, 18:30
    ///   Dates:      20th June, June 20th, 20/6/2025, 2025-6-20,
    ///               today, tomorrow, next friday, friday
    ///   Assignee:   first capitalized name after the leading word
    #[command(alias = "p")]
    Parse {
        /// The task line
        text: String,
    },

    /// Extract tasks from a meeting transcript
    ///
    /// Reads the transcript from a file, from --text, or from stdin, and
    /// prints one task per sentence that reads as an assignment such as
    /// "Aman you take the landing page by 10pm tomorrow."
    ///
    /// # Examples
    ///
    ///   quicktask transcript standup.txt
    ///   quicktask transcript --text "Priya please review the PR before friday."
    ///   pbpaste | quicktask transcript
    #[command(alias = "t")]
    Transcript(TranscriptArgs),

    /// Build a task list from several lines
    ///
    /// Each line is parsed into a task and added to the top of a fresh
    /// in-memory list, which is printed newest first. Nothing is saved.
    ///
    /// # Examples
    ///
    ///   quicktask add "Call client tomorrow 5pm" "Write docs P2"
    ///   quicktask add --stdin < tasks.txt
    ///   quicktask add "Ship beta" --transcript standup.txt --complete 1
    #[command(alias = "a")]
    Add(AddArgs),

    /// Generate shell completions
    ///
    /// Outputs the completion script for the specified shell.
    ///
    /// # Examples
    ///
    ///   quicktask completions zsh > ~/.zsh/completions/_quicktask
    ///   quicktask completions bash --install
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },

    /// Inspect or create the config file
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct TranscriptArgs {
    /// Transcript file ('-' or omitted reads stdin)
    pub file: Option<PathBuf>,

    /// Transcript text given inline
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task lines to add, in order
    pub texts: Vec<String>,

    /// Also read task lines from stdin, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Add tasks extracted from this transcript file
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Mark the task at this position of the printed list as done (1-based)
    #[arg(long, value_name = "N")]
    pub complete: Vec<usize>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{s}': {e}"))
}
