//! Parsed task record and the fields the extraction passes fill in.

use serde::{Deserialize, Serialize};

/// Title used when nothing is left after extraction.
pub const PLACEHOLDER_TITLE: &str = "New Task";

/// Words that never count as an assignee.
pub const STOP_WORDS: [&str; 15] = [
    "by", "on", "at", "for", "with", "to", "from", "the", "and", "or", "but", "in", "out", "up",
    "down",
];

/// Priority levels for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Urgent.
    P1,
    /// High.
    P2,
    /// Normal.
    #[default]
    P3,
    /// Low.
    P4,
}

impl Priority {
    /// Parse a `p1`..`p4` token, ignoring case.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "P1" => Some(Self::P1),
            "P2" => Some(Self::P2),
            "P3" => Some(Self::P3),
            "P4" => Some(Self::P4),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        })
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s.trim()).ok_or_else(|| format!("invalid priority '{s}' (expected P1-P4)"))
    }
}

/// Result of parsing a task line or a transcript sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTask {
    /// What needs doing. Never empty.
    pub title: String,
    /// Who it is for, if a name was found.
    pub assignee: Option<String>,
    /// Display date such as `"20 June"`.
    pub due_date: Option<String>,
    /// Time exactly as written, e.g. `"5pm"` or `"11:00 PM"`.
    pub due_time: Option<String>,
    /// Task priority.
    pub priority: Priority,
}

impl ParsedTask {
    /// Check if this task has a date or time attached.
    #[must_use]
    pub const fn has_schedule(&self) -> bool {
        self.due_date.is_some() || self.due_time.is_some()
    }
}

impl Default for ParsedTask {
    fn default() -> Self {
        ExtractedFields::default().finish("")
    }
}

/// Fields collected while the passes run. Defaults are applied by [`finish`].
///
/// [`finish`]: ExtractedFields::finish
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub due_time: Option<String>,
    pub priority: Option<Priority>,
}

impl ExtractedFields {
    /// Build the final record, falling back to `P3` and the placeholder title.
    #[must_use]
    pub fn finish(self, title: &str) -> ParsedTask {
        let title = title.trim();
        ParsedTask {
            title: if title.is_empty() {
                PLACEHOLDER_TITLE.to_string()
            } else {
                title.to_string()
            },
            assignee: self.assignee,
            due_date: self.due_date,
            due_time: self.due_time,
            priority: self.priority.unwrap_or_default(),
        }
    }
}

/// Check whether a word can name an assignee.
///
/// The word must start with an upper-case letter, be purely ASCII
/// alphabetic, be longer than one character and not be a stop word.
#[must_use]
pub fn is_name_token(word: &str) -> bool {
    word.len() > 1
        && word.chars().all(|c| c.is_ascii_alphabetic())
        && word.starts_with(|c: char| c.is_ascii_uppercase())
        && !STOP_WORDS.contains(&word.to_ascii_lowercase().as_str())
}

/// Collapse runs of whitespace to single spaces.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
