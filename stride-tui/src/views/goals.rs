//! Goal list view and the add-goal form.

use crate::state::{App, FormField, GoalForm};
use crate::views::centered;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use stride_core::{Goal, GoalPriority};

fn priority_color(priority: GoalPriority) -> Color {
    match priority {
        GoalPriority::High => Color::Red,
        GoalPriority::Medium => Color::Yellow,
        GoalPriority::Low => Color::Green,
    }
}

fn goal_line(goal: &Goal) -> Line<'_> {
    let checkbox = if goal.completed { "[x] " } else { "[ ] " };
    let mut spans = vec![
        Span::raw(checkbox),
        Span::styled(
            goal.title.as_str(),
            if goal.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            },
        ),
        Span::styled(
            format!("  {}", goal.category),
            Style::default().fg(Color::Blue),
        ),
        Span::styled(
            format!("  {}", goal.priority),
            Style::default().fg(priority_color(goal.priority)),
        ),
    ];
    if let Some(deadline) = goal.deadline {
        spans.push(Span::styled(
            format!("  due {}", deadline.format("%Y-%m-%d")),
            Style::default().fg(Color::Magenta),
        ));
    }
    Line::from(spans)
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let goals = app.visible_goals();

    if goals.is_empty() {
        let empty = Paragraph::new("No goals yet. Press n to add your first goal.")
            .block(Block::default().title("Goals").borders(Borders::ALL));
        f.render_widget(empty, area);
    } else {
        let items: Vec<ListItem> = goals.iter().map(|g| ListItem::new(goal_line(g))).collect();
        let mut state = ListState::default();
        state.select(Some(app.selected.min(goals.len() - 1)));

        let list = List::new(items)
            .block(Block::default().title("Goals").borders(Borders::ALL))
            .highlight_style(Style::default().bg(Color::Indexed(236)))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut state);
    }

    if let Some(form) = &app.goal_form {
        render_form(f, form, area);
    }
}

fn render_form(f: &mut Frame<'_>, form: &GoalForm, area: Rect) {
    let popup = centered(area, 52, 9);
    f.render_widget(Clear, popup);

    let field = |label: &str, value: &str, focused: bool| -> Line<'static> {
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Line::from(Span::styled(
            format!("{}{:<12}{}", marker, label, value),
            style,
        ))
    };

    let lines = vec![
        field("Title *", &form.title, form.focused == FormField::Title),
        field(
            "Description",
            &form.description,
            form.focused == FormField::Description,
        ),
        field(
            "Category",
            &form.category.to_string(),
            form.focused == FormField::Category,
        ),
        field(
            "Priority",
            &form.priority.to_string(),
            form.focused == FormField::Priority,
        ),
        field(
            "Deadline",
            &form.deadline,
            form.focused == FormField::Deadline,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Tab next field • Space cycle choice • Enter save • Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Add New Goal").borders(Borders::ALL));
    f.render_widget(paragraph, popup);
}
