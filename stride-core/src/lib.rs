//! Stride Core - Goal and Chat Types
//!
//! Pure data structures and the in-memory goal store. No I/O, no async.
//! The API and TUI crates both depend on this.

pub mod chat;
pub mod goal;
pub mod store;
pub mod summary;

pub use chat::{ChatMessage, ChatRole, ChatTranscript};
pub use goal::{Goal, GoalCategory, GoalDraft, GoalId, GoalPriority};
pub use store::{GoalStats, GoalStore, SortCriterion};
pub use summary::{goals_summary, summary_line};

use chrono::{DateTime, Utc};

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;
