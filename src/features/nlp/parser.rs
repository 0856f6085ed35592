//! Single-line task parser.
//!
//! Parses strings like "Finish landing page Aman by 11pm 20th June P1"
//! into structured task data.
//!
//! The line runs through a fixed sequence of passes. Each pass looks for its
//! field in the text that is still left, records it, and cuts the matched
//! text out before the next pass runs, so no two fields ever claim the same
//! words.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::task::{collapse_whitespace, is_name_token, ExtractedFields, ParsedTask, Priority};
use crate::core::patterns::{self, Matcher, DATE_MATCHERS, TIME_MATCHERS};
use crate::core::{first_match, normalize_date_phrase, today};

/// Working state threaded through the passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    /// Text not yet claimed by any pass.
    pub remaining: String,
    /// Fields found so far.
    pub fields: ExtractedFields,
    /// First word of the original input, the task's verb in the usual case.
    pub leading_word: Option<String>,
}

impl ParseState {
    /// Start a parse of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            remaining: input.trim().to_string(),
            fields: ExtractedFields::default(),
            leading_word: input.split_whitespace().next().map(str::to_string),
        }
    }
}

/// One extraction step.
pub type Pass = fn(ParseState, NaiveDate) -> ParseState;

/// The passes of the single-line parser, in the order they run.
pub const PASSES: [(&str, Pass); 4] = [
    ("priority", priority_pass),
    ("time", time_pass),
    ("date", date_pass),
    ("assignee", assignee_pass),
];

// A dangling connective left behind once the fields are gone: "Call mom by".
static TRAILING_CONNECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+(?:by|on|at|for|with|to|from)$")
        .unwrap_or_else(|e| panic!("Invalid trailing connective regex: {e}"))
});

/// Parse a task line against today's date.
///
/// # Examples
///
/// ```
/// use quicktask::features::nlp::{parse_task, Priority};
///
/// let task = parse_task("Write release notes P2");
/// assert_eq!(task.title, "Write release notes");
/// assert_eq!(task.priority, Priority::P2);
/// ```
#[must_use]
pub fn parse_task(input: &str) -> ParsedTask {
    parse_task_on(input, today())
}

/// Parse a task line, resolving relative dates against `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quicktask::features::nlp::{parse_task_on, Priority};
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
/// let task = parse_task_on("Finish landing page Aman by 11pm 20th June P1", today);
/// assert_eq!(task.title, "Finish landing page");
/// assert_eq!(task.assignee.as_deref(), Some("Aman"));
/// assert_eq!(task.due_time.as_deref(), Some("11pm"));
/// assert_eq!(task.due_date.as_deref(), Some("20 June"));
/// assert_eq!(task.priority, Priority::P1);
/// ```
#[must_use]
pub fn parse_task_on(input: &str, today: NaiveDate) -> ParsedTask {
    tracing::debug!(input, "parsing task line");

    let state = PASSES
        .iter()
        .fold(ParseState::new(input), |state, (name, pass)| {
            let next = pass(state, today);
            tracing::trace!(pass = *name, remaining = %next.remaining, "pass done");
            next
        });

    let task = state.fields.finish(&clean_title(&state.remaining));
    tracing::debug!(?task, "parsed task line");
    task
}

/// Priority pass: first `P1`..`P4` token.
#[must_use]
pub fn priority_pass(mut state: ParseState, _today: NaiveDate) -> ParseState {
    let (rest, priority) = extract_priority(&state.remaining);
    if priority.is_some() {
        state.remaining = rest;
        state.fields.priority = priority;
    }
    state
}

/// Time pass: first pattern in [`TIME_MATCHERS`] with a match.
#[must_use]
pub fn time_pass(mut state: ParseState, _today: NaiveDate) -> ParseState {
    let (rest, time) = extract_time(&state.remaining);
    if time.is_some() {
        state.remaining = rest;
        state.fields.due_time = time;
    }
    state
}

/// Date pass: first pattern in [`DATE_MATCHERS`] with a match, normalized.
#[must_use]
pub fn date_pass(mut state: ParseState, today: NaiveDate) -> ParseState {
    let (rest, date) = extract_date(&state.remaining, &DATE_MATCHERS, today);
    if date.is_some() {
        state.remaining = rest;
        state.fields.due_date = date;
    }
    state
}

/// Assignee pass: first capitalized name, scanning left to right.
///
/// The leading word of the input is the task's verb ("Call", "Finish") and
/// is never taken as a name. It is only skipped while it still heads the
/// remaining text; once an earlier pass cut it out ("P1 Aman fix bug"), the
/// scan starts at the first word.
#[must_use]
pub fn assignee_pass(mut state: ParseState, _today: NaiveDate) -> ParseState {
    let mut words: Vec<&str> = state.remaining.split_whitespace().collect();
    let skip = usize::from(words.first().copied() == state.leading_word.as_deref());
    let found = words
        .iter()
        .enumerate()
        .skip(skip)
        .find(|(_, word)| is_name_token(word))
        .map(|(i, word)| (i, (*word).to_string()));

    if let Some((index, name)) = found {
        words.remove(index);
        let rest = words.join(" ");
        state.remaining = rest;
        state.fields.assignee = Some(name);
    }
    state
}

/// Cut the first priority token out of `text`.
pub(crate) fn extract_priority(text: &str) -> (String, Option<Priority>) {
    match patterns::PRIORITY.find(text) {
        Some(hit) => (hit.remove_from(text), Priority::from_token(hit.text)),
        None => (text.to_string(), None),
    }
}

/// Cut the first time expression out of `text`, keeping it as written.
pub(crate) fn extract_time(text: &str) -> (String, Option<String>) {
    first_match(&TIME_MATCHERS, text).map_or_else(
        || (text.to_string(), None),
        |hit| (hit.remove_from(text), Some(hit.text.to_string())),
    )
}

/// Cut the first date phrase out of `text` and normalize it.
pub(crate) fn extract_date(
    text: &str,
    matchers: &[Matcher],
    today: NaiveDate,
) -> (String, Option<String>) {
    first_match(matchers, text).map_or_else(
        || (text.to_string(), None),
        |hit| {
            let date = normalize_date_phrase(hit.text, today);
            (hit.remove_from(text), Some(date))
        },
    )
}

/// Collapse whitespace and drop one dangling connective at the end.
fn clean_title(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    TRAILING_CONNECTIVE.replace(&collapsed, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::PLACEHOLDER_TITLE;

    // Wednesday
    fn wed() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
    }

    fn parse(input: &str) -> ParsedTask {
        parse_task_on(input, wed())
    }

    // ===================
    // Scenario Tests
    // ===================

    #[test]
    fn test_parse_full_line() {
        let task = parse("Finish landing page Aman by 11pm 20th June P1");
        assert_eq!(task.title, "Finish landing page");
        assert_eq!(task.assignee.as_deref(), Some("Aman"));
        assert_eq!(task.due_time.as_deref(), Some("11pm"));
        assert_eq!(task.due_date.as_deref(), Some("20 June"));
        assert_eq!(task.priority, Priority::P1);
    }

    #[test]
    fn test_parse_call_client_tomorrow() {
        let task = parse("Call client tomorrow 5pm");
        assert_eq!(task.title, "Call client");
        assert!(task.assignee.is_none());
        assert_eq!(task.due_time.as_deref(), Some("5pm"));
        assert_eq!(task.due_date.as_deref(), Some("19 June"));
        assert_eq!(task.priority, Priority::P3);
    }

    // ===================
    // Basic Parsing Tests
    // ===================

    #[test]
    fn test_parse_simple_task() {
        let task = parse("buy milk");
        assert_eq!(task.title, "buy milk");
        assert!(task.assignee.is_none());
        assert!(task.due_date.is_none());
        assert!(task.due_time.is_none());
        assert_eq!(task.priority, Priority::P3);
    }

    #[test]
    fn test_parse_empty_input() {
        let task = parse("");
        assert_eq!(task.title, PLACEHOLDER_TITLE);
        assert_eq!(task.priority, Priority::P3);
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert_eq!(parse("   \t ").title, PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_parse_only_fields_gives_placeholder() {
        let task = parse("P2 tomorrow 9am");
        assert_eq!(task.title, PLACEHOLDER_TITLE);
        assert_eq!(task.priority, Priority::P2);
        assert_eq!(task.due_time.as_deref(), Some("9am"));
        assert_eq!(task.due_date.as_deref(), Some("19 June"));
    }

    #[test]
    fn test_parse_nonsense_keeps_input_as_title() {
        let task = parse("?? ## !!");
        assert_eq!(task.title, "?? ## !!");
    }

    // ===============
    // Priority Tests
    // ===============

    #[test]
    fn test_priority_lowercase_is_upper_cased() {
        assert_eq!(parse("fix login p1").priority, Priority::P1);
    }

    #[test]
    fn test_first_priority_wins() {
        let task = parse("P4 triage P2 bugs");
        assert_eq!(task.priority, Priority::P4);
        assert_eq!(task.title, "triage P2 bugs");
    }

    #[test]
    fn test_priority_out_of_range_stays_in_title() {
        let task = parse("check P5 sensor");
        assert_eq!(task.priority, Priority::P3);
        assert_eq!(task.title, "check P5 sensor");
    }

    // ===========
    // Time Tests
    // ===========

    #[test]
    fn test_time_kept_as_written() {
        let task = parse("standup at 11:00 PM");
        assert_eq!(task.due_time.as_deref(), Some("11:00 PM"));
        assert_eq!(task.title, "standup");
    }

    #[test]
    fn test_bare_24h_time() {
        let task = parse("deploy 18:30");
        assert_eq!(task.due_time.as_deref(), Some("18:30"));
        assert_eq!(task.title, "deploy");
    }

    #[test]
    fn test_meridiem_time_beats_earlier_bare_time() {
        let task = parse("sync 10:15 or 3pm");
        assert_eq!(task.due_time.as_deref(), Some("3pm"));
        assert_eq!(task.title, "sync 10:15 or");
    }

    #[test]
    fn test_only_one_time_extracted() {
        let task = parse("run 9am and 5pm");
        assert_eq!(task.due_time.as_deref(), Some("9am"));
        assert_eq!(task.title, "run and 5pm");
    }

    // ===========
    // Date Tests
    // ===========

    #[test]
    fn test_month_day_date() {
        let task = parse("renew passport June 20th");
        assert_eq!(task.due_date.as_deref(), Some("20 June"));
        assert_eq!(task.title, "renew passport");
    }

    #[test]
    fn test_numeric_dates_pass_through() {
        assert_eq!(parse("pay rent 1/7/2025").due_date.as_deref(), Some("1/7/2025"));
        assert_eq!(parse("pay rent 2025-7-1").due_date.as_deref(), Some("2025-7-1"));
    }

    #[test]
    fn test_today() {
        assert_eq!(parse("email recap today").due_date.as_deref(), Some("18 June"));
    }

    #[test]
    fn test_next_weekday() {
        let task = parse("demo next Friday");
        assert_eq!(task.due_date.as_deref(), Some("20 June"));
        assert_eq!(task.title, "demo");
    }

    #[test]
    fn test_bare_weekday() {
        assert_eq!(parse("review monday").due_date.as_deref(), Some("23 June"));
    }

    #[test]
    fn test_tonight_is_not_a_date_in_a_task_line() {
        let task = parse("ship tonight");
        assert!(task.due_date.is_none());
        assert_eq!(task.title, "ship tonight");
    }

    #[test]
    fn test_unmatched_date_text_leaves_date_absent() {
        let task = parse("wrap up by end of day");
        assert!(task.due_date.is_none());
        assert_eq!(task.title, "wrap up by end of day");
    }

    #[test]
    fn test_time_digits_not_taken_as_date() {
        let task = parse("call 10:30 2025-7-1");
        assert_eq!(task.due_time.as_deref(), Some("10:30"));
        assert_eq!(task.due_date.as_deref(), Some("2025-7-1"));
        assert_eq!(task.title, "call");
    }

    // ===============
    // Assignee Tests
    // ===============

    #[test]
    fn test_first_capitalized_word_wins() {
        let task = parse("review PR with Priya");
        assert_eq!(task.assignee.as_deref(), Some("PR"));
        assert_eq!(task.title, "review with Priya");
    }

    #[test]
    fn test_assignee_skips_stop_words() {
        let task = parse("send The report to Maria");
        assert_eq!(task.assignee.as_deref(), Some("Maria"));
        assert_eq!(task.title, "send The report");
    }

    #[test]
    fn test_assignee_requires_alphabetic() {
        let task = parse("ping O'Neil and Team2");
        assert!(task.assignee.is_none());
    }

    #[test]
    fn test_month_in_date_not_taken_as_assignee() {
        let task = parse("plan offsite June 3rd");
        assert!(task.assignee.is_none());
        assert_eq!(task.due_date.as_deref(), Some("3 June"));
    }

    #[test]
    fn test_capitalized_common_word_is_known_false_positive() {
        // No disambiguation exists: any capitalized word after the verb is a name.
        let task = parse("update Budget sheet");
        assert_eq!(task.assignee.as_deref(), Some("Budget"));
        assert_eq!(task.title, "update sheet");
    }

    #[test]
    fn test_leading_name_is_not_an_assignee() {
        let task = parse("Aman fix bug");
        assert!(task.assignee.is_none());
        assert_eq!(task.title, "Aman fix bug");
    }

    #[test]
    fn test_name_after_leading_priority_is_an_assignee() {
        let task = parse("P1 Aman fix bug");
        assert_eq!(task.assignee.as_deref(), Some("Aman"));
        assert_eq!(task.title, "fix bug");
        assert_eq!(task.priority, Priority::P1);
    }

    #[test]
    fn test_name_after_leading_date_is_an_assignee() {
        let task = parse("tomorrow Aman review PR");
        assert_eq!(task.assignee.as_deref(), Some("Aman"));
        assert_eq!(task.title, "review PR");
        assert_eq!(task.due_date.as_deref(), Some("19 June"));
    }

    #[test]
    fn test_leading_word_recorded_before_passes() {
        let state = ParseState::new("  P2 Lee ship it");
        assert_eq!(state.leading_word.as_deref(), Some("P2"));
    }

    // ====================
    // Title Cleanup Tests
    // ====================

    #[test]
    fn test_trailing_connective_removed_once() {
        assert_eq!(parse("hand over to").title, "hand over");
        assert_eq!(parse("talk to from").title, "talk to");
    }

    #[test]
    fn test_trailing_connective_case_sensitive() {
        assert_eq!(parse("hand over TO").title, "hand over TO");
    }

    #[test]
    fn test_single_connective_is_kept() {
        assert_eq!(parse("by").title, "by");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(parse("  write    the   docs  ").title, "write the docs");
    }

    // ====================
    // Property Tests
    // ====================

    #[test]
    fn test_reparse_title_extracts_nothing_new() {
        let inputs = [
            "Finish landing page Aman by 11pm 20th June P1",
            "Call client tomorrow 5pm",
            "send The report to Maria friday 10:00 P2",
            "deploy 18:30 next monday",
        ];
        for input in inputs {
            let first = parse(input);
            let again = parse(&first.title);
            assert!(again.assignee.is_none(), "{input}");
            assert!(again.due_date.is_none(), "{input}");
            assert!(again.due_time.is_none(), "{input}");
            assert_eq!(again.priority, Priority::P3, "{input}");
            assert_eq!(again.title, first.title, "{input}");
        }
    }

    #[test]
    fn test_title_never_empty() {
        for input in ["", " ", "P1", "5pm", "today", "P1 5pm today", "x"] {
            assert!(!parse(input).title.is_empty(), "{input:?}");
        }
    }

    #[test]
    fn test_passes_run_in_order() {
        let names: Vec<&str> = PASSES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["priority", "time", "date", "assignee"]);
    }

    #[test]
    fn test_single_pass_in_isolation() {
        let state = time_pass(ParseState::new("lunch 12:30pm with Sam"), wed());
        assert_eq!(state.fields.due_time.as_deref(), Some("12:30pm"));
        assert_eq!(state.remaining, "lunch  with Sam");
        assert!(state.fields.assignee.is_none());
    }
}
