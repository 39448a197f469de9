//! Goals summary formatting
//!
//! Produces the compact text block injected into the assistant's system
//! instruction: one line per goal with title, category, priority, optional
//! deadline, and a completed marker. This is one-directional by design;
//! nothing ever parses the summary back.

use crate::goal::Goal;

/// Marker appended to the line of a completed goal.
pub const COMPLETED_MARKER: &str = "\u{2713} Completed";

/// Format a single goal as its summary line.
pub fn summary_line(goal: &Goal) -> String {
    let deadline = match goal.deadline {
        Some(date) => format!(", deadline: {}", date.format("%Y-%m-%d")),
        None => String::new(),
    };
    let completed = if goal.completed {
        format!(" {}", COMPLETED_MARKER)
    } else {
        String::new()
    };
    format!(
        "- {} ({}, {} priority{}){}",
        goal.title, goal.category, goal.priority, deadline, completed
    )
}

/// Format the whole goal list, one line per goal, newline-separated.
pub fn goals_summary<'a, I>(goals: I) -> String
where
    I: IntoIterator<Item = &'a Goal>,
{
    goals
        .into_iter()
        .map(summary_line)
        .collect::<Vec<_>>()
        .join("\n")
}
