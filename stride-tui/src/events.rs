//! Event types for the TUI event loop.

use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    /// Relay round-trip succeeded; payload is the assistant's reply text.
    AssistantReply(String),
    /// Relay round-trip failed; payload is the diagnostic message.
    RelayFailed(String),
    /// The identity provider reported a sign-in state change.
    AuthChanged(bool),
}
