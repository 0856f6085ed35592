//! Core abstractions for quicktask.
//!
//! This module provides the ordered pattern lists and the date normalizer
//! shared by the single-line parser and the transcript extractor.

mod datetime;
pub mod patterns;

pub use datetime::{format_day_month, next_weekday, normalize_date_phrase, today};
pub use patterns::{first_match, Hit, Matcher};
