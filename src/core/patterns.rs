//! Ordered pattern lists shared by the task parsers.
//!
//! Every list is tried front to back and the first matcher that finds
//! anything wins. The order is part of the behaviour: `11:00 pm` must be
//! claimed by the meridiem pattern before the bare `H:MM` one sees it, and
//! `next friday` must be tried before a bare `friday`.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

const MONTHS: &str =
    "january|february|march|april|may|june|july|august|september|october|november|december";
const WEEKDAYS: &str = "monday|tuesday|wednesday|thursday|friday|saturday|sunday";

/// A named regex in an ordered matcher list.
#[derive(Debug)]
pub struct Matcher {
    /// Short label used in trace output.
    pub name: &'static str,
    regex: Regex,
}

impl Matcher {
    fn new(name: &'static str, pattern: &str) -> Self {
        let regex =
            Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid {name} regex: {e}"));
        Self { name, regex }
    }

    /// Find the first match of this pattern in `text`.
    #[must_use]
    pub fn find<'t>(&self, text: &'t str) -> Option<Hit<'t>> {
        self.regex.find(text).map(|m| Hit {
            matcher: self.name,
            text: m.as_str(),
            span: m.range(),
        })
    }
}

/// A successful match: the matched text and where it sits in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit<'t> {
    /// Name of the matcher that produced this hit.
    pub matcher: &'static str,
    /// The exact matched substring.
    pub text: &'t str,
    /// Byte range of the match.
    pub span: Range<usize>,
}

impl Hit<'_> {
    /// Return `source` with this hit cut out and the ends trimmed.
    ///
    /// Interior whitespace is left alone; the title cleanup pass collapses it.
    #[must_use]
    pub fn remove_from(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len());
        out.push_str(&source[..self.span.start]);
        out.push_str(&source[self.span.end..]);
        out.trim().to_string()
    }
}

/// Try each matcher in order and return the first hit.
#[must_use]
pub fn first_match<'t>(matchers: &[Matcher], text: &'t str) -> Option<Hit<'t>> {
    matchers.iter().find_map(|m| {
        let hit = m.find(text);
        tracing::trace!(matcher = m.name, matched = hit.is_some(), "pattern attempt");
        hit
    })
}

/// `P1`..`P4`, case-insensitive, as a whole word.
pub static PRIORITY: Lazy<Matcher> = Lazy::new(|| Matcher::new("priority", r"(?i)\bP[1-4]\b"));

/// Clock times, most specific first.
pub static TIME_MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    vec![
        Matcher::new("time-hm-meridiem", r"(?i)\b\d{1,2}:\d{2}\s*(?:am|pm)\b"),
        Matcher::new("time-h-meridiem", r"(?i)\b\d{1,2}\s*(?:am|pm)\b"),
        Matcher::new("time-hm", r"\b\d{1,2}:\d{2}\b"),
    ]
});

fn calendar_matchers() -> Vec<Matcher> {
    vec![
        Matcher::new(
            "date-day-month",
            &format!(r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{MONTHS})\b"),
        ),
        Matcher::new(
            "date-month-day",
            &format!(r"(?i)\b(?:{MONTHS})\s+\d{{1,2}}(?:st|nd|rd|th)?\b"),
        ),
        Matcher::new("date-dmy", r"\b\d{1,2}/\d{1,2}/\d{4}\b"),
        Matcher::new("date-iso", r"\b\d{4}-\d{1,2}-\d{1,2}\b"),
        Matcher::new("date-tomorrow", r"(?i)\btomorrow\b"),
        Matcher::new("date-today", r"(?i)\btoday\b"),
    ]
}

fn weekday_matchers() -> Vec<Matcher> {
    vec![
        Matcher::new("date-next-weekday", &format!(r"(?i)\bnext\s+(?:{WEEKDAYS})\b")),
        Matcher::new("date-weekday", &format!(r"(?i)\b(?:{WEEKDAYS})\b")),
    ]
}

/// Date phrases recognised in a single task line.
pub static DATE_MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    let mut matchers = calendar_matchers();
    matchers.extend(weekday_matchers());
    matchers
});

/// Date phrases recognised in a transcript deadline.
///
/// Same list as [`DATE_MATCHERS`], plus `tonight` right after `today`.
pub static DEADLINE_DATE_MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    let mut matchers = calendar_matchers();
    matchers.push(Matcher::new("date-tonight", r"(?i)\btonight\b"));
    matchers.extend(weekday_matchers());
    matchers
});

/// `20th June`, `3 march` with the day and month captured.
pub static DAY_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(\d{{1,2}})(?:st|nd|rd|th)?\s+({MONTHS})$"))
        .unwrap_or_else(|e| panic!("Invalid day-month regex: {e}"))
});

/// `June 20th`, `march 3` with the month and day captured.
pub static MONTH_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^({MONTHS})\s+(\d{{1,2}})(?:st|nd|rd|th)?$"))
        .unwrap_or_else(|e| panic!("Invalid month-day regex: {e}"))
});
