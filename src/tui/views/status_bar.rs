//! Status bar view
//!
//! Shows the last reload time, the account count, any status message, and
//! key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    spans.push(Span::styled(
        " Last reload: ",
        Style::default().fg(Color::White),
    ));
    let reload_text = app
        .last_reload
        .clone()
        .unwrap_or_else(|| "never".to_string());
    spans.push(Span::styled(reload_text, Style::default().fg(Color::Cyan)));

    // Separator
    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        format!("{} accounts", app.view_model.account_count()),
        Style::default().fg(Color::White),
    ));

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  s:Save  c:Check  n:New section  d:Delete  r:Reload ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len + hints.len())
        .max(1);
    let padding = " ".repeat(padding_len);

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}
