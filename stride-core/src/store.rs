//! In-memory goal store
//!
//! The store is session-scoped state owned by the client: one instance per
//! session, mutated only by direct user actions. Sort projections are pure
//! derived views; the underlying collection keeps insertion order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::goal::{Goal, GoalDraft, GoalId};

/// Sort projection criteria for the goal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// Newest first within each completion group.
    #[default]
    Date,
    /// High before medium before low within each completion group.
    Priority,
    /// Earliest deadline first; goals without a deadline sort last.
    Deadline,
}

impl SortCriterion {
    /// All criteria in the order the client cycles through them.
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Date,
        SortCriterion::Priority,
        SortCriterion::Deadline,
    ];

    pub fn next(&self) -> Self {
        match self {
            SortCriterion::Date => SortCriterion::Priority,
            SortCriterion::Priority => SortCriterion::Deadline,
            SortCriterion::Deadline => SortCriterion::Date,
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortCriterion::Date => "date",
            SortCriterion::Priority => "priority",
            SortCriterion::Deadline => "deadline",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SortCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(SortCriterion::Date),
            "priority" => Ok(SortCriterion::Priority),
            "deadline" => Ok(SortCriterion::Deadline),
            other => Err(format!("Unknown sort criterion: {}", other)),
        }
    }
}

/// Derived counters over the collection. Recomputed on every read,
/// never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

/// Ordered, in-memory collection of goals.
///
/// None of the mutating operations can fail: an empty title or an unknown
/// id is a silent no-op, reported through the return value only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalStore {
    goals: Vec<Goal>,
}

impl GoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a goal built from `draft`. Returns the assigned id, or `None`
    /// when the trimmed title is empty (the collection is left untouched).
    pub fn add_goal(&mut self, draft: GoalDraft) -> Option<GoalId> {
        let goal = Goal::from_draft(draft)?;
        let id = goal.id;
        self.goals.push(goal);
        Some(id)
    }

    /// Flip the completion flag of the matching goal. Returns whether a
    /// goal matched.
    pub fn toggle_complete(&mut self, id: GoalId) -> bool {
        match self.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.completed = !goal.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching goal. Returns whether a goal matched.
    pub fn delete_goal(&mut self, id: GoalId) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        self.goals.len() != before
    }

    /// Goals in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Non-destructive sort projection. Completed goals always form a
    /// contiguous suffix; within a completion group the criterion decides.
    /// Ties keep insertion order (the sort is stable).
    pub fn sorted_view(&self, criterion: SortCriterion) -> Vec<&Goal> {
        let mut view: Vec<&Goal> = self.goals.iter().collect();
        view.sort_by(|a, b| {
            a.completed
                .cmp(&b.completed)
                .then_with(|| Self::compare_within_group(a, b, criterion))
        });
        view
    }

    fn compare_within_group(a: &Goal, b: &Goal, criterion: SortCriterion) -> Ordering {
        match criterion {
            SortCriterion::Date => b.created_at.cmp(&a.created_at),
            SortCriterion::Priority => a.priority.rank().cmp(&b.priority.rank()),
            SortCriterion::Deadline => match (a.deadline, b.deadline) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(da), Some(db)) => da.cmp(&db),
            },
        }
    }

    /// Total / completed / active counts, computed from scratch.
    pub fn stats(&self) -> GoalStats {
        let completed = self.goals.iter().filter(|g| g.completed).count();
        GoalStats {
            total: self.goals.len(),
            completed,
            active: self.goals.len() - completed,
        }
    }
}
