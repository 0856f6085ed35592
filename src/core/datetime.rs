//! Date phrase normalization.
//!
//! Turns the relative or partial date phrases the parsers pick out of text
//! ("tomorrow", "next friday", "20th june") into the display form the task
//! list shows, `"<day> <Month>"`. The current date is always passed in so
//! that callers and tests control the clock.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use super::patterns::{DAY_MONTH, MONTH_DAY};

/// Today's date on the local wall clock.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as `"<day> <Month>"`, e.g. `"20 June"`.
#[must_use]
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%-d %B").to_string()
}

/// Normalize a matched date phrase against `today`.
///
/// Supports:
/// - `today`, `tonight`, `tomorrow`
/// - `monday` .. `sunday` and `next monday` .. `next sunday` (always 1-7 days out)
/// - `20th June`, `June 20th` (ordinal dropped, month capitalized)
///
/// Anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quicktask::core::normalize_date_phrase;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
/// assert_eq!(normalize_date_phrase("tomorrow", today), "19 June");
/// assert_eq!(normalize_date_phrase("20th JUNE", today), "20 June");
/// assert_eq!(normalize_date_phrase("2025-07-01", today), "2025-07-01");
/// ```
#[must_use]
pub fn normalize_date_phrase(phrase: &str, today: NaiveDate) -> String {
    let lower = phrase.trim().to_lowercase();

    match lower.as_str() {
        "today" | "tonight" => return format_day_month(today),
        "tomorrow" => return format_day_month(today + Duration::days(1)),
        _ => {},
    }

    if let Some(weekday) = parse_weekday_phrase(&lower) {
        return format_day_month(next_weekday(today, weekday));
    }

    if let Some(caps) = DAY_MONTH.captures(&lower) {
        return format!("{} {}", &caps[1], capitalize(&caps[2]));
    }

    if let Some(caps) = MONTH_DAY.captures(&lower) {
        return format!("{} {}", &caps[2], capitalize(&caps[1]));
    }

    phrase.to_string()
}

/// The next `target` strictly after `today`.
///
/// If today already is `target`, the result is a week out.
#[must_use]
pub fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let mut days = i64::from(target.num_days_from_sunday())
        - i64::from(today.weekday().num_days_from_sunday());
    if days <= 0 {
        days += 7;
    }
    today + Duration::days(days)
}

/// Parse `"friday"` or `"next friday"`. "next" does not add an extra week.
fn parse_weekday_phrase(lower: &str) -> Option<Weekday> {
    let words: Vec<&str> = lower.split_whitespace().collect();
    let day = match words.as_slice() {
        [day] | ["next", day] => *day,
        _ => return None,
    };

    match day {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}
