//! Task wrapper and the session task list.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::QuickTaskError;
use crate::features::nlp::{ParsedTask, Priority};

/// A parsed task accepted into the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Time-based id, unique within its list.
    pub id: String,
    /// The parsed fields.
    #[serde(flatten)]
    pub fields: ParsedTask,
    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
    /// When the task was added.
    pub created_at: DateTime<Local>,
}

/// Partial edit of a task.
///
/// `None` leaves a field alone. For optional fields `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub assignee: Option<Option<String>>,
    pub due_date: Option<Option<String>>,
    pub due_time: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            let title = title.trim();
            if !title.is_empty() {
                task.fields.title = title.to_string();
            }
        }
        if let Some(assignee) = self.assignee {
            task.fields.assignee = non_blank(assignee);
        }
        if let Some(due_date) = self.due_date {
            task.fields.due_date = non_blank(due_date);
        }
        if let Some(due_time) = self.due_time {
            task.fields.due_time = non_blank(due_time);
        }
        if let Some(priority) = self.priority {
            task.fields.priority = priority;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

// An emptied edit field means "no value".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Tasks for one session, newest first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parsed task at the top of the list.
    pub fn add(&mut self, fields: ParsedTask) -> &Task {
        self.add_at(fields, Local::now())
    }

    /// Add a parsed task with an explicit creation time.
    pub fn add_at(&mut self, fields: ParsedTask, created_at: DateTime<Local>) -> &Task {
        let id = self.next_id(created_at);
        tracing::debug!(%id, title = %fields.title, "task added");
        self.tasks.insert(
            0,
            Task {
                id,
                fields,
                completed: false,
                created_at,
            },
        );
        &self.tasks[0]
    }

    /// Add several tasks at the top, keeping their order.
    pub fn add_all<I>(&mut self, tasks: I)
    where
        I: IntoIterator<Item = ParsedTask>,
    {
        let tasks: Vec<ParsedTask> = tasks.into_iter().collect();
        for fields in tasks.into_iter().rev() {
            self.add(fields);
        }
    }

    /// Apply a partial update to the task with `id`.
    ///
    /// # Errors
    ///
    /// Returns `QuickTaskError::NotFound` if no task has that id.
    pub fn update(&mut self, id: &str, update: TaskUpdate) -> Result<&Task, QuickTaskError> {
        let task = self.find_mut(id)?;
        update.apply(task);
        Ok(&*task)
    }

    /// Mark the task with `id` as done.
    ///
    /// # Errors
    ///
    /// Returns `QuickTaskError::NotFound` if no task has that id.
    pub fn complete(&mut self, id: &str) -> Result<&Task, QuickTaskError> {
        self.update(
            id,
            TaskUpdate {
                completed: Some(true),
                ..TaskUpdate::default()
            },
        )
    }

    /// Remove the task with `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns `QuickTaskError::NotFound` if no task has that id.
    pub fn remove(&mut self, id: &str) -> Result<Task, QuickTaskError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| QuickTaskError::NotFound(format!("task {id}")))?;
        tracing::debug!(id, "task removed");
        Ok(self.tasks.remove(index))
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks not yet done.
    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    /// Tasks already done.
    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed)
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Task, QuickTaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| QuickTaskError::NotFound(format!("task {id}")))
    }

    // Epoch milliseconds, bumped past any id already taken.
    fn next_id(&self, at: DateTime<Local>) -> String {
        let mut millis = at.timestamp_millis();
        while self.get(&millis.to_string()).is_some() {
            millis += 1;
        }
        millis.to_string()
    }
}
