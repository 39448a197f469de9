use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;
use stride_tui::config::TuiConfig;
use stride_tui::keys::{map_key, KeyAction};
use stride_tui::state::{App, FormField, GoalForm, Tab};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn app() -> App {
    App::new(TuiConfig::default(), true)
}

#[test]
fn tab_cycle_returns_to_start() {
    assert_eq!(Tab::Goals.next().next(), Tab::Goals);
    assert_eq!(Tab::Assistant.next().next(), Tab::Assistant);
}

proptest! {
    #[test]
    fn mapped_keys_never_panic(code in prop_oneof![
        any::<char>().prop_map(KeyCode::Char),
        Just(KeyCode::Tab),
        Just(KeyCode::Enter),
        Just(KeyCode::Esc),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Backspace),
    ]) {
        let _ = map_key(press(code));
    }

    #[test]
    fn quit_binding_is_stable(kind in prop_oneof![
        Just(KeyEventKind::Press),
        Just(KeyEventKind::Release),
    ]) {
        let event = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::empty(),
        };
        let action = map_key(event);
        if kind == KeyEventKind::Press {
            prop_assert_eq!(action, Some(KeyAction::Quit));
        } else {
            prop_assert_eq!(action, None);
        }
    }

    #[test]
    fn form_field_focus_cycles_through_all_fields(steps in 0usize..20) {
        let mut form = GoalForm::default();
        let mut seen = Vec::new();
        for _ in 0..steps {
            seen.push(form.focused);
            form.focus_next();
        }
        if steps >= 5 {
            for field in [
                FormField::Title,
                FormField::Description,
                FormField::Category,
                FormField::Priority,
                FormField::Deadline,
            ] {
                prop_assert!(seen.contains(&field));
            }
        }
        // Five steps is one full lap.
        let mut lap = GoalForm::default();
        for _ in 0..5 {
            lap.focus_next();
        }
        prop_assert_eq!(lap.focused, FormField::Title);
    }

    #[test]
    fn form_push_pop_restores_text(text in "[a-zA-Z0-9 ]{0,24}") {
        let mut form = GoalForm::default();
        for c in text.chars() {
            form.push_char(c);
        }
        prop_assert_eq!(&form.title, &text);
        for _ in 0..text.chars().count() {
            form.pop_char();
        }
        prop_assert!(form.title.is_empty());
    }

    #[test]
    fn deadline_parses_only_iso_dates(year in 2000i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let mut form = GoalForm::default();
        form.deadline = format!("{:04}-{:02}-{:02}", year, month, day);
        prop_assert!(form.parsed_deadline().is_ok());

        form.deadline = format!("{}/{}/{}", month, day, year);
        prop_assert!(form.parsed_deadline().is_err());
    }

    #[test]
    fn chat_submit_trims_and_blocks_reentry(text in "[ ]{0,3}[a-z]{1,12}[ ]{0,3}") {
        let mut app = app();
        app.chat_input = text.clone();
        let outbound = app.submit_chat_input();
        prop_assert!(outbound.is_some());
        let outbound = outbound.unwrap();
        prop_assert_eq!(outbound.messages.len(), 1);
        prop_assert_eq!(outbound.messages[0].content.as_str(), text.trim());

        app.chat_input = "again".to_string();
        prop_assert!(app.submit_chat_input().is_none());
    }

    #[test]
    fn blank_chat_input_never_sends(text in "[ \t]{0,8}") {
        let mut app = app();
        app.chat_input = text;
        prop_assert!(app.submit_chat_input().is_none());
        prop_assert!(!app.chat_in_flight);
    }

    #[test]
    fn config_timeouts_validated(timeout in 0u64..5, tick in 0u64..5) {
        let config = TuiConfig {
            request_timeout_ms: timeout,
            tick_interval_ms: tick,
            ..TuiConfig::default()
        };
        let valid = timeout > 0 && tick > 0;
        prop_assert_eq!(config.validate().is_ok(), valid);
    }
}
