//! Meeting transcript task extraction.
//!
//! Picks task assignments out of free-form meeting notes such as
//! "Aman you take the landing page by 10pm tomorrow. Priya please review
//! the PR before friday." Each sentence is read on its own and yields at
//! most one task; sentences that do not look like an assignment are skipped.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::parser::{extract_date, extract_priority, extract_time};
use super::task::{collapse_whitespace, is_name_token, ExtractedFields, ParsedTask};
use crate::core::patterns::DEADLINE_DATE_MATCHERS;
use crate::core::{normalize_date_phrase, today};

/// Descriptions shorter than this are not treated as tasks.
pub const MIN_DESCRIPTION_LEN: usize = 3;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").unwrap_or_else(|e| panic!("Invalid sentence regex: {e}")));

// Assignment grammars, strictest first. Groups: 1 = assignee,
// 2 = description, 3 = deadline (optional).
static ASSIGNMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "Name [you] [should|need to|please] <task> [by|until|before|at <deadline>]"
        r"(?i)^(\w+)\s+(?:you\s+)?(?:should\s+|need\s+to\s+|please\s+)?(.+?)(?:\s+(?:by|until|before|at)\s+(.+))?$",
        // "Name <task> [by|until|before|at <deadline>]"
        r"(?i)^(\w+)\s+(.+?)(?:\s+(?:by|until|before|at)\s+(.+))?$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("Invalid assignment regex: {e}")))
    .collect()
});

static LEADING_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:take\s+care\s+of\s+|take\s+|do\s+|handle\s+|work\s+on\s+)")
        .unwrap_or_else(|e| panic!("Invalid leading verb regex: {e}"))
});

/// Pieces of a sentence that matched an assignment grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Assignment<'s> {
    assignee: &'s str,
    description: &'s str,
    deadline: Option<&'s str>,
}

/// Extract tasks from a transcript against today's date.
#[must_use]
pub fn extract_tasks(transcript: &str) -> Vec<ParsedTask> {
    extract_tasks_on(transcript, today())
}

/// Extract tasks from a transcript, resolving relative dates against `today`.
///
/// Returns one task per sentence that reads as an assignment, in sentence
/// order. Never fails; an empty result means nothing qualified.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quicktask::features::nlp::extract_tasks_on;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
/// let tasks = extract_tasks_on("Aman you take the landing page by 10pm tomorrow.", today);
/// assert_eq!(tasks.len(), 1);
/// assert_eq!(tasks[0].assignee.as_deref(), Some("Aman"));
/// assert_eq!(tasks[0].title, "the landing page");
/// assert_eq!(tasks[0].due_time.as_deref(), Some("10pm"));
/// assert_eq!(tasks[0].due_date.as_deref(), Some("19 June"));
/// ```
#[must_use]
pub fn extract_tasks_on(transcript: &str, today: NaiveDate) -> Vec<ParsedTask> {
    let sentences = split_sentences(transcript);
    tracing::debug!(count = sentences.len(), "split transcript");

    let tasks: Vec<ParsedTask> = sentences
        .into_iter()
        .filter_map(|sentence| {
            let task = sentence_to_task(sentence, today);
            if task.is_none() {
                tracing::trace!(sentence, "no assignment found");
            }
            task
        })
        .collect();

    tracing::debug!(count = tasks.len(), "extracted transcript tasks");
    tasks
}

/// Split on runs of `.`, `!` and `?`, dropping empty pieces.
#[must_use]
pub fn split_sentences(transcript: &str) -> Vec<&str> {
    SENTENCE_END
        .split(transcript)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn sentence_to_task(sentence: &str, today: NaiveDate) -> Option<ParsedTask> {
    let assignment = match_assignment(sentence)?;

    let description = LEADING_VERB.replace(assignment.description, "");
    let (description, priority) = extract_priority(description.trim());

    let mut fields = ExtractedFields {
        assignee: Some(assignment.assignee.to_string()),
        priority,
        ..ExtractedFields::default()
    };
    if let Some(deadline) = assignment.deadline {
        let (date, time) = parse_deadline(deadline, today);
        fields.due_date = date;
        fields.due_time = time;
    }

    let task = fields.finish(&collapse_whitespace(&description));
    tracing::debug!(sentence, ?task, "transcript task");
    Some(task)
}

/// First grammar whose match has a real name and a long enough description.
fn match_assignment(sentence: &str) -> Option<Assignment<'_>> {
    ASSIGNMENT_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(sentence)?;
        let assignee = caps.get(1)?.as_str();
        let description = caps.get(2)?.as_str().trim();

        if !is_name_token(assignee) || description.chars().count() < MIN_DESCRIPTION_LEN {
            tracing::trace!(assignee, description, "assignment rejected");
            return None;
        }

        Some(Assignment {
            assignee,
            description,
            deadline: caps.get(3).map(|m| m.as_str().trim()),
        })
    })
}

/// Split a deadline into `(date, time)`.
///
/// The time comes out first, then a date phrase from what is left. When no
/// date phrase matches, leftover text becomes the date as is.
fn parse_deadline(deadline: &str, today: NaiveDate) -> (Option<String>, Option<String>) {
    let (rest, time) = extract_time(deadline);
    let (_, date) = extract_date(&rest, &DEADLINE_DATE_MATCHERS, today);

    let date = date.or_else(|| {
        let leftover = rest.trim();
        (!leftover.is_empty()).then(|| normalize_date_phrase(leftover, today))
    });

    (date, time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::{Priority, PLACEHOLDER_TITLE};

    // Wednesday
    fn wed() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
    }

    fn extract(transcript: &str) -> Vec<ParsedTask> {
        extract_tasks_on(transcript, wed())
    }

    // ===================
    // Segmentation Tests
    // ===================

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("One. Two!! Three?! four"),
            vec!["One", "Two", "Three", "four"]
        );
    }

    #[test]
    fn test_split_drops_empty_pieces() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" ... !!! ?? ").is_empty());
    }

    // ===================
    // Scenario Tests
    // ===================

    #[test]
    fn test_extract_single_assignment() {
        let tasks = extract("Aman you take the landing page by 10pm tomorrow.");
        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.assignee.as_deref(), Some("Aman"));
        assert!(task.title.starts_with("the landing page"));
        assert_eq!(task.due_time.as_deref(), Some("10pm"));
        assert_eq!(task.due_date.as_deref(), Some("19 June"));
        assert_eq!(task.priority, Priority::P3);
    }

    #[test]
    fn test_extract_empty_transcript() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_lowercase_chatter_yields_nothing() {
        assert!(extract("let's wrap up now").is_empty());
        assert!(extract("the team should sync").is_empty());
    }

    #[test]
    fn test_multiple_sentences_keep_order() {
        let tasks = extract(
            "Aman you take the landing page by 10pm tomorrow. \
             Priya please review the PR before friday! let's wrap up now?",
        );
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].assignee.as_deref(), Some("Aman"));
        assert_eq!(tasks[1].assignee.as_deref(), Some("Priya"));
        assert_eq!(tasks[1].title, "review the PR");
        assert_eq!(tasks[1].due_date.as_deref(), Some("20 June"));
        assert!(tasks[1].due_time.is_none());
    }

    // ===================
    // Grammar Tests
    // ===================

    #[test]
    fn test_fillers_are_dropped() {
        let tasks = extract("Maria you should update the roadmap. Omar need to fix the build");
        assert_eq!(tasks[0].title, "update the roadmap");
        assert_eq!(tasks[1].title, "fix the build");
    }

    #[test]
    fn test_no_deadline() {
        let tasks = extract("Ken please draft the agenda");
        assert_eq!(tasks[0].title, "draft the agenda");
        assert!(tasks[0].due_date.is_none());
        assert!(tasks[0].due_time.is_none());
    }

    #[test]
    fn test_dangling_connective_stays_in_transcript_title() {
        // Transcript titles get no connective cleanup, unlike task lines.
        let tasks = extract("Lee handle it by");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "it by");
        assert_eq!(tasks[0].assignee.as_deref(), Some("Lee"));
        assert!(tasks[0].due_date.is_none());
    }

    #[test]
    fn test_short_description_is_rejected() {
        assert!(extract("Ravi go").is_empty());
    }

    #[test]
    fn test_second_grammar_used_when_first_rejects() {
        // The first grammar eats "you" and leaves "do", which is too short.
        let tasks = extract("Aman you do");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "you do");
    }

    #[test]
    fn test_stop_word_is_not_an_assignee() {
        assert!(extract("The deck needs polish").is_empty());
    }

    #[test]
    fn test_capitalized_pronoun_is_known_false_positive() {
        let tasks = extract("We should ship the beta");
        assert_eq!(tasks[0].assignee.as_deref(), Some("We"));
        assert_eq!(tasks[0].title, "ship the beta");
    }

    // ===================
    // Description Tests
    // ===================

    #[test]
    fn test_longest_leading_verb_is_stripped() {
        let tasks = extract("Nina take care of the invoices. Leo work on onboarding. Sam handle support");
        assert_eq!(tasks[0].title, "the invoices");
        assert_eq!(tasks[1].title, "onboarding");
        assert_eq!(tasks[2].title, "support");
    }

    #[test]
    fn test_priority_in_description() {
        let tasks = extract("Sam handle deploy p1 by friday");
        assert_eq!(tasks[0].title, "deploy");
        assert_eq!(tasks[0].priority, Priority::P1);
    }

    #[test]
    fn test_description_reduced_to_nothing_gets_placeholder() {
        let tasks = extract("Sam do P2");
        assert_eq!(tasks[0].title, PLACEHOLDER_TITLE);
        assert_eq!(tasks[0].priority, Priority::P2);
    }

    // ===================
    // Deadline Tests
    // ===================

    #[test]
    fn test_deadline_time_and_tonight() {
        let tasks = extract("Nina take care of the invoices at 3pm tonight");
        assert_eq!(tasks[0].due_time.as_deref(), Some("3pm"));
        assert_eq!(tasks[0].due_date.as_deref(), Some("18 June"));
    }

    #[test]
    fn test_deadline_time_only() {
        let tasks = extract("Lee please call the vendor at 4:30 PM");
        assert_eq!(tasks[0].title, "call the vendor");
        assert_eq!(tasks[0].due_time.as_deref(), Some("4:30 PM"));
        assert!(tasks[0].due_date.is_none());
    }

    #[test]
    fn test_deadline_day_month_is_normalized() {
        let tasks = extract("Zoe finish the audit until 3rd july");
        assert_eq!(tasks[0].due_date.as_deref(), Some("3 July"));
    }

    #[test]
    fn test_unmatched_deadline_text_becomes_date() {
        // Unlike the single-line parser, leftover deadline text is kept.
        let tasks = extract("Sam handle the migration until end of sprint");
        assert_eq!(tasks[0].title, "the migration");
        assert_eq!(tasks[0].due_date.as_deref(), Some("end of sprint"));
        assert!(tasks[0].due_time.is_none());
    }

    #[test]
    fn test_every_task_has_assignee_and_title() {
        let tasks = extract(
            "Aman you take the landing page by 10pm tomorrow. Priya do P1. \
             We wrap. Ken please draft the agenda before monday",
        );
        for task in tasks {
            assert!(task.assignee.is_some());
            assert!(!task.title.is_empty());
        }
    }
}
