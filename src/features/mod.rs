//! Feature implementations for quicktask.
//!
//! This module contains:
//! - Natural language task and transcript parsing
//! - The in-memory task list
//! - Shell integration

pub mod nlp;
pub mod shell;
pub mod tasks;
