//! Session state for the TUI.
//!
//! All client-side state lives on one session-scoped `App`: the goal
//! store, the draft form, the chat transcript, and the in-flight flag.
//! Operations take `&mut self`; nothing here is global.

use chrono::NaiveDate;
use stride_core::{
    goals_summary, ChatMessage, ChatTranscript, Goal, GoalCategory, GoalDraft, GoalId,
    GoalPriority, GoalStats, GoalStore, SortCriterion,
};

use crate::config::TuiConfig;

/// Fixed greeting seeding every transcript. Never sent to the relay.
pub const GREETING: &str = "Hi! I'm your Goal Assistant. I can help you create action plans, \
                            break down goals, suggest strategies, and keep you motivated. \
                            What would you like help with?";

/// Inline fallback shown when a relay call fails. The user re-submits
/// manually; nothing is retried.
pub const RELAY_FALLBACK_MESSAGE: &str =
    "Sorry, I encountered an error. Make sure the relay server is running and try again.";

/// Which pane has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Goals,
    Assistant,
}

impl Tab {
    pub fn next(&self) -> Self {
        match self {
            Tab::Goals => Tab::Assistant,
            Tab::Assistant => Tab::Goals,
        }
    }
}

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Category,
    Priority,
    Deadline,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Category,
            FormField::Category => FormField::Priority,
            FormField::Priority => FormField::Deadline,
            FormField::Deadline => FormField::Title,
        }
    }
}

/// The form's deadline field did not parse as an ISO date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Deadline must be YYYY-MM-DD (or empty)")]
pub struct DeadlineParseError;

/// In-progress goal entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalForm {
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub priority: GoalPriority,
    pub deadline: String,
    pub focused: FormField,
}

impl GoalForm {
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn cycle_choice(&mut self) {
        match self.focused {
            FormField::Category => {
                let all = GoalCategory::ALL;
                let index = all.iter().position(|c| *c == self.category).unwrap_or(0);
                self.category = all[(index + 1) % all.len()];
            }
            FormField::Priority => {
                let all = GoalPriority::ALL;
                let index = all.iter().position(|p| *p == self.priority).unwrap_or(0);
                self.priority = all[(index + 1) % all.len()];
            }
            _ => {}
        }
    }

    pub fn push_char(&mut self, c: char) {
        match self.focused {
            FormField::Title => self.title.push(c),
            FormField::Description => self.description.push(c),
            FormField::Deadline => self.deadline.push(c),
            FormField::Category | FormField::Priority => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.focused {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Deadline => {
                self.deadline.pop();
            }
            FormField::Category | FormField::Priority => {}
        }
    }

    /// Parse the deadline field. Empty means no deadline; anything that is
    /// not `YYYY-MM-DD` is reported back as unparseable.
    pub fn parsed_deadline(&self) -> Result<Option<NaiveDate>, DeadlineParseError> {
        let trimmed = self.deadline.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| DeadlineParseError)
    }

    pub fn to_draft(&self, deadline: Option<NaiveDate>) -> GoalDraft {
        GoalDraft {
            title: self.title.clone(),
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            category: self.category,
            priority: self.priority,
            deadline,
        }
    }
}

/// Transient status line content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Payload for one relay round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundChat {
    pub messages: Vec<ChatMessage>,
    pub goals_context: String,
}

/// All session state.
pub struct App {
    pub config: TuiConfig,
    pub store: GoalStore,
    pub sort: SortCriterion,
    pub selected: usize,
    pub transcript: ChatTranscript,
    pub chat_input: String,
    pub chat_in_flight: bool,
    pub active_tab: Tab,
    pub goal_form: Option<GoalForm>,
    pub notification: Option<Notification>,
    pub authenticated: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: TuiConfig, authenticated: bool) -> Self {
        Self {
            config,
            store: GoalStore::new(),
            sort: SortCriterion::default(),
            selected: 0,
            transcript: ChatTranscript::new(GREETING),
            chat_input: String::new(),
            chat_in_flight: false,
            active_tab: Tab::default(),
            goal_form: None,
            notification: None,
            authenticated,
            should_quit: false,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notification = Some(Notification {
            level,
            message: message.into(),
        });
    }

    // ========================================================================
    // Goal list
    // ========================================================================

    /// Goals in the order currently displayed.
    pub fn visible_goals(&self) -> Vec<&Goal> {
        self.store.sorted_view(self.sort)
    }

    pub fn stats(&self) -> GoalStats {
        self.store.stats()
    }

    pub fn selected_goal_id(&self) -> Option<GoalId> {
        self.visible_goals().get(self.selected).map(|g| g.id)
    }

    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_goal_id() {
            self.store.toggle_complete(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_goal_id() {
            self.store.delete_goal(id);
            self.clamp_selection();
        }
    }

    // ========================================================================
    // Goal form
    // ========================================================================

    pub fn open_goal_form(&mut self) {
        self.goal_form = Some(GoalForm::default());
    }

    pub fn cancel_goal_form(&mut self) {
        self.goal_form = None;
    }

    /// Submit the form. An empty title is a silent no-op and the form stays
    /// open, matching the store contract. An unparseable deadline keeps the
    /// form open with a notification. On success the form is cleared.
    pub fn submit_goal_form(&mut self) {
        let Some(form) = &self.goal_form else {
            return;
        };
        if form.title.trim().is_empty() {
            return;
        }
        let deadline = match form.parsed_deadline() {
            Ok(deadline) => deadline,
            Err(err) => {
                self.notify(NotificationLevel::Error, err.to_string());
                return;
            }
        };
        let draft = form.to_draft(deadline);
        if self.store.add_goal(draft).is_some() {
            self.goal_form = None;
        }
    }

    // ========================================================================
    // Chat
    // ========================================================================

    /// Chat input editing. The whole input is disabled while a request is
    /// in flight, not just submission.
    pub fn push_chat_char(&mut self, c: char) {
        if !self.chat_in_flight {
            self.chat_input.push(c);
        }
    }

    pub fn pop_chat_char(&mut self) {
        if !self.chat_in_flight {
            self.chat_input.pop();
        }
    }

    pub fn clear_chat_input(&mut self) {
        if !self.chat_in_flight {
            self.chat_input.clear();
        }
    }

    /// Submit the chat input. Returns the relay payload when a request
    /// should go out; `None` while another request is in flight or when
    /// the input is blank. One outstanding request at a time.
    pub fn submit_chat_input(&mut self) -> Option<OutboundChat> {
        if self.chat_in_flight {
            return None;
        }
        let text = self.chat_input.trim();
        if text.is_empty() {
            return None;
        }
        self.transcript.push_user(text);
        self.chat_input.clear();
        self.chat_in_flight = true;
        Some(OutboundChat {
            messages: self.transcript.outbound_messages().to_vec(),
            goals_context: goals_summary(self.store.goals()),
        })
    }

    pub fn apply_assistant_reply(&mut self, reply: impl Into<String>) {
        self.transcript.push_assistant(reply);
        self.chat_in_flight = false;
    }

    /// Degrade to an inline assistant message; the UI never crashes on a
    /// failed relay call.
    pub fn apply_relay_failure(&mut self, detail: impl Into<String>) {
        self.transcript.push_assistant(RELAY_FALLBACK_MESSAGE);
        self.chat_in_flight = false;
        self.notify(NotificationLevel::Error, detail);
    }
}
