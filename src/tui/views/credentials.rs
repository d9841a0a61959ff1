//! Saved credentials panel
//!
//! Shown only when the selected account has at least one saved login
//! credential; a missing half renders as "Not saved".

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, CredentialsPanel};

/// Render the credentials panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let CredentialsPanel::Shown { username, password } = &app.credentials_panel else {
        return;
    };

    let block = Block::default()
        .title(" Saved Credentials ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        credential_line("Username", username),
        credential_line("Password", password),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One credential line, "Label: value" or "Label: Not saved"
fn credential_line(label: &str, value: &Option<String>) -> Line<'static> {
    let value_span = match value {
        Some(v) => Span::styled(v.clone(), Style::default().fg(Color::White)),
        None => Span::styled("Not saved".to_string(), Style::default().fg(Color::DarkGray)),
    };

    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Yellow)),
        value_span,
    ])
}
