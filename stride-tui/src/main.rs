//! Stride TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use stride_tui::api_client::RelayClient;
use stride_tui::config::TuiConfig;
use stride_tui::error::TuiError;
use stride_tui::events::TuiEvent;
use stride_tui::keys::{map_key, KeyAction};
use stride_tui::session::{IdentityProvider, TokenIdentity};
use stride_tui::state::{App, FormField, Tab};
use stride_tui::views::render_view;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    let relay = RelayClient::new(&config)?;

    let identity = TokenIdentity::from_session_token(config.session_token.as_deref());
    let subscription = identity.subscribe();
    let mut app = App::new(config, subscription.is_authenticated());

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);

    spawn_input_reader(event_tx.clone());
    spawn_auth_watcher(subscription, event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {}
            Some(event) = event_rx.recv() => {
                handle_event(&mut app, &relay, event, &event_tx);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

/// Forward sign-in transitions from the identity provider into the event
/// loop. Ends when the provider is dropped.
fn spawn_auth_watcher(
    mut subscription: stride_tui::session::AuthSubscription,
    sender: mpsc::Sender<TuiEvent>,
) {
    tokio::spawn(async move {
        while let Some(signed_in) = subscription.changed().await {
            if sender.send(TuiEvent::AuthChanged(signed_in)).await.is_err() {
                break;
            }
        }
    });
}

fn handle_event(
    app: &mut App,
    relay: &RelayClient,
    event: TuiEvent,
    sender: &mpsc::Sender<TuiEvent>,
) {
    match event {
        TuiEvent::Input(key) => handle_key(app, relay, key, sender),
        TuiEvent::AssistantReply(reply) => app.apply_assistant_reply(reply),
        TuiEvent::RelayFailed(detail) => app.apply_relay_failure(detail),
        TuiEvent::AuthChanged(signed_in) => app.authenticated = signed_in,
        TuiEvent::Tick | TuiEvent::Resize { .. } => {}
    }
}

fn handle_key(
    app: &mut App,
    relay: &RelayClient,
    key: KeyEvent,
    sender: &mpsc::Sender<TuiEvent>,
) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    if !app.authenticated {
        if let Some(KeyAction::Quit) = map_key(key) {
            app.should_quit = true;
        }
        return;
    }
    if app.goal_form.is_some() {
        handle_form_key(app, key);
        return;
    }
    match app.active_tab {
        Tab::Assistant => handle_chat_key(app, relay, key, sender),
        Tab::Goals => handle_goals_key(app, key),
    }
}

fn handle_goals_key(app: &mut App, key: KeyEvent) {
    let Some(action) = map_key(key) else {
        return;
    };
    app.notification = None;
    match action {
        KeyAction::Quit => app.should_quit = true,
        KeyAction::NextTab => app.active_tab = app.active_tab.next(),
        KeyAction::MoveUp => app.select_previous(),
        KeyAction::MoveDown => app.select_next(),
        KeyAction::NewGoal => app.open_goal_form(),
        KeyAction::ToggleComplete => app.toggle_selected(),
        KeyAction::DeleteGoal => app.delete_selected(),
        KeyAction::CycleSort => app.cycle_sort(),
        KeyAction::Confirm | KeyAction::Cancel => {}
    }
}

/// The form owns the keyboard while open; text keys go to the focused
/// field instead of the browse bindings.
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_goal_form(),
        KeyCode::Enter => app.submit_goal_form(),
        _ => {
            let Some(form) = app.goal_form.as_mut() else {
                return;
            };
            match key.code {
                KeyCode::Tab => form.focus_next(),
                KeyCode::Backspace => form.pop_char(),
                KeyCode::Char(' ') => match form.focused {
                    FormField::Category | FormField::Priority => form.cycle_choice(),
                    _ => form.push_char(' '),
                },
                KeyCode::Char(c) => form.push_char(c),
                _ => {}
            }
        }
    }
}

fn handle_chat_key(
    app: &mut App,
    relay: &RelayClient,
    key: KeyEvent,
    sender: &mpsc::Sender<TuiEvent>,
) {
    match key.code {
        KeyCode::Tab => app.active_tab = app.active_tab.next(),
        KeyCode::Esc => app.clear_chat_input(),
        KeyCode::Backspace => app.pop_chat_char(),
        KeyCode::Enter => {
            if let Some(outbound) = app.submit_chat_input() {
                let relay = relay.clone();
                let sender = sender.clone();
                tokio::spawn(async move {
                    let event = match relay.chat(outbound.messages, outbound.goals_context).await {
                        Ok(reply) => TuiEvent::AssistantReply(reply),
                        Err(err) => TuiEvent::RelayFailed(err.to_string()),
                    };
                    let _ = sender.send(event).await;
                });
            }
        }
        KeyCode::Char(c) => app.push_chat_char(c),
        _ => {}
    }
}
