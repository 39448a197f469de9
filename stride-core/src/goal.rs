//! Goal entity and its enums

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::Timestamp;

/// Goal identifier using UUIDv7 for timestamp-sortable IDs.
/// UUIDv7 embeds a Unix timestamp, so ids are naturally ordered by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(Uuid);

impl GoalId {
    /// Generate a new time-ordered id.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for GoalId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for GoalId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category a goal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    #[default]
    Personal,
    Work,
    Health,
    Learning,
}

impl GoalCategory {
    /// All categories in display order.
    pub const ALL: [GoalCategory; 4] = [
        GoalCategory::Personal,
        GoalCategory::Work,
        GoalCategory::Health,
        GoalCategory::Learning,
    ];
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GoalCategory::Personal => "personal",
            GoalCategory::Work => "work",
            GoalCategory::Health => "health",
            GoalCategory::Learning => "learning",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "personal" => Ok(GoalCategory::Personal),
            "work" => Ok(GoalCategory::Work),
            "health" => Ok(GoalCategory::Health),
            "learning" => Ok(GoalCategory::Learning),
            other => Err(format!("Unknown goal category: {}", other)),
        }
    }
}

/// Priority of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl GoalPriority {
    /// All priorities in display order.
    pub const ALL: [GoalPriority; 3] =
        [GoalPriority::Low, GoalPriority::Medium, GoalPriority::High];

    /// Sort rank: high sorts before medium sorts before low.
    pub fn rank(&self) -> u8 {
        match self {
            GoalPriority::High => 0,
            GoalPriority::Medium => 1,
            GoalPriority::Low => 2,
        }
    }
}

impl fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GoalPriority::Low => "low",
            GoalPriority::Medium => "medium",
            GoalPriority::High => "high",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for GoalPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(GoalPriority::Low),
            "medium" => Ok(GoalPriority::Medium),
            "high" => Ok(GoalPriority::High),
            other => Err(format!("Unknown goal priority: {}", other)),
        }
    }
}

/// A user-defined target with a completion state.
///
/// `id` and `created_at` are assigned once at creation and never change.
/// `title` is guaranteed non-empty for any stored goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub description: Option<String>,
    pub category: GoalCategory,
    pub priority: GoalPriority,
    pub deadline: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: Timestamp,
}

impl Goal {
    /// Build a goal from a draft. Returns `None` when the trimmed title is
    /// empty; the draft is otherwise taken as-is.
    pub(crate) fn from_draft(draft: GoalDraft) -> Option<Self> {
        let title = draft.title.trim();
        if title.is_empty() {
            return None;
        }
        let description = draft
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Some(Self {
            id: GoalId::new(),
            title: title.to_string(),
            description,
            category: draft.category,
            priority: draft.priority,
            deadline: draft.deadline,
            completed: false,
            created_at: Utc::now(),
        })
    }
}

/// User input for a new goal, before the store assigns identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalDraft {
    pub title: String,
    pub description: Option<String>,
    pub category: GoalCategory,
    pub priority: GoalPriority,
    pub deadline: Option<NaiveDate>,
}

impl GoalDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_id_is_time_ordered() {
        let a = GoalId::new();
        let b = GoalId::new();
        assert_ne!(a, b);
        assert!(a <= b);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(GoalCategory::default(), GoalCategory::Personal);
        assert_eq!(GoalPriority::default(), GoalPriority::Medium);
    }

    #[test]
    fn test_priority_rank_ordering() {
        assert!(GoalPriority::High.rank() < GoalPriority::Medium.rank());
        assert!(GoalPriority::Medium.rank() < GoalPriority::Low.rank());
    }

    #[test]
    fn test_category_round_trip_str() {
        for category in GoalCategory::ALL {
            let parsed: GoalCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("gardening".parse::<GoalCategory>().is_err());
    }

    #[test]
    fn test_from_draft_trims_title() {
        let goal = Goal::from_draft(GoalDraft::new("  Learn Rust  ")).unwrap();
        assert_eq!(goal.title, "Learn Rust");
        assert!(!goal.completed);
    }

    #[test]
    fn test_from_draft_rejects_whitespace_title() {
        assert!(Goal::from_draft(GoalDraft::new("   ")).is_none());
        assert!(Goal::from_draft(GoalDraft::new("")).is_none());
    }

    #[test]
    fn test_from_draft_drops_empty_description() {
        let mut draft = GoalDraft::new("A");
        draft.description = Some("  ".to_string());
        let goal = Goal::from_draft(draft).unwrap();
        assert_eq!(goal.description, None);
    }

    #[test]
    fn test_goal_serializes_camel_case() {
        let goal = Goal::from_draft(GoalDraft::new("Ship it")).unwrap();
        let json = serde_json::to_string(&goal).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"category\":\"personal\""));
        assert!(json.contains("\"priority\":\"medium\""));
    }
}
