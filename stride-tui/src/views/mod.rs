//! View rendering dispatch.

pub mod chat;
pub mod goals;

use crate::state::{App, NotificationLevel, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    if !app.authenticated {
        render_sign_in(f);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_tab {
        Tab::Goals => goals::render(f, app, layout[1]),
        Tab::Assistant => chat::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);
}

/// Shown while the external identity provider reports signed-out.
fn render_sign_in(f: &mut Frame<'_>) {
    let block = Block::default().borders(Borders::ALL).title("Stride");
    let text = Paragraph::new(
        "Not signed in.\n\nSign in with your identity provider, then put the \
         session token in the TUI config (session_token) and restart.\n\nq quit",
    )
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(text, centered(f.size(), 60, 9));
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let stats = app.stats();
    let title = format!(
        "Stride Goal Planner | {} total / {} active / {} done | sort: {}",
        stats.total, stats.active, stats.completed, app.sort
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, Style::default().fg(Color::Cyan)));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.active_tab {
        Tab::Goals => "j/k move • n new • x toggle • d delete • s sort • Tab assistant • q quit",
        Tab::Assistant => "type your question • Enter send • Tab goals • Esc clear • q in goals tab quits",
    };
    let (text, style) = match &app.notification {
        Some(note) => {
            let (label, color) = match note.level {
                NotificationLevel::Info => ("INFO", Color::Blue),
                NotificationLevel::Error => ("ERROR", Color::Red),
            };
            (
                format!("{}: {}", label, note.message),
                Style::default().fg(color),
            )
        }
        None => (help.to_string(), Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(Paragraph::new(Span::styled(text, style)), area);
}

/// Center a `width` x `height` box inside `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
