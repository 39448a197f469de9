//! Assistant chat view.

use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use stride_core::ChatRole;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_transcript(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let hint = Paragraph::new(Span::styled(
        "Try: \"Help me create a plan for [goal name]\" or \"Break down my learning goals into steps\"",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(hint, chunks[2]);
}

fn render_transcript(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for message in app.transcript.messages() {
        let (label, color) = match message.role {
            ChatRole::User => ("you", Color::Cyan),
            ChatRole::Assistant => ("assistant", Color::Green),
            ChatRole::System => ("system", Color::DarkGray),
        };
        lines.push(Line::from(Span::styled(
            format!("{}:", label),
            Style::default().fg(color),
        )));
        for text_line in message.content.lines() {
            lines.push(Line::from(format!("  {}", text_line)));
        }
        lines.push(Line::from(""));
    }
    if app.chat_in_flight {
        lines.push(Line::from(Span::styled(
            "assistant is thinking...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Keep the tail visible; ratatui scroll offset is from the top.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(Block::default().title("Goal Assistant").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame<'_>, app: &App, area: Rect) {
    let title = if app.chat_in_flight {
        "Input (waiting for reply...)"
    } else {
        "Ask me anything about your goals"
    };
    let style = if app.chat_in_flight {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let input = Paragraph::new(Span::styled(app.chat_input.as_str(), style))
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(input, area);
}
