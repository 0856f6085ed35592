use std::fmt::Write;

use colored::{ColoredString, Colorize};

use crate::features::nlp::{ParsedTask, Priority};
use crate::features::tasks::{Task, TaskList};

fn priority_badge(priority: Priority) -> ColoredString {
    let label = format!("[{priority}]");
    match priority {
        Priority::P1 => label.red().bold(),
        Priority::P2 => label.yellow().bold(),
        Priority::P3 => label.blue(),
        Priority::P4 => label.dimmed(),
    }
}

/// Detail lines (assignee, due) shared by every task view.
fn write_details(output: &mut String, task: &ParsedTask) {
    if let Some(assignee) = &task.assignee {
        writeln!(output, "  {} {assignee}", "Assignee:".cyan()).ok();
    }
    if task.has_schedule() {
        let due: Vec<&str> = [task.due_date.as_deref(), task.due_time.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        writeln!(output, "  {} {}", "Due:".yellow(), due.join(" at ")).ok();
    }
}

/// Format a single parsed task as pretty output
pub fn format_parsed_pretty(task: &ParsedTask) -> String {
    let mut output = format!("{} {}\n", priority_badge(task.priority), task.title.bold());
    write_details(&mut output, task);
    output
}

/// Format transcript tasks as pretty output
pub fn format_extracted_pretty(tasks: &[ParsedTask]) -> String {
    if tasks.is_empty() {
        return "Extracted tasks (0)\n  No tasks found".to_string();
    }

    let mut output = format!("Extracted tasks ({})\n", tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        output.push_str(&format_parsed_pretty(task));
    }

    output
}

fn format_task_line(position: usize, task: &Task) -> String {
    let status_icon = if task.completed {
        "[x]".green()
    } else {
        "[ ]".white()
    };
    let title = if task.completed {
        task.fields.title.strikethrough().to_string()
    } else {
        task.fields.title.bold().to_string()
    };

    let mut output = format!(
        "{position:>2}. {status_icon} {} {title}  {}\n",
        priority_badge(task.fields.priority),
        task.id.dimmed()
    );
    write_details(&mut output, &task.fields);
    output
}

/// Format a task list as pretty output, numbered from 1
pub fn format_task_list_pretty(list: &TaskList) -> String {
    if list.is_empty() {
        return "Tasks (0 items)\n  No items".to_string();
    }

    let mut output = format!(
        "Tasks ({} items, {} pending)\n",
        list.len(),
        list.pending().count()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (i, task) in list.tasks().iter().enumerate() {
        output.push_str(&format_task_line(i + 1, task));
    }

    output
}
