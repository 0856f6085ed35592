//! In-memory task list.
//!
//! Holds accepted parse results as [`Task`]s for the lifetime of a session.
//! Nothing is persisted; the list is whatever the caller keeps alive.

mod list;

pub use list::{Task, TaskList, TaskUpdate};
