//! Account form view
//!
//! The entry form for saving and checking accounts: the Riot id triple,
//! optional login credentials, and a section selector.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedPanel, FormField};

/// Render the account form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Form;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // In-game name
            Constraint::Length(1), // Hashtag
            Constraint::Length(1), // Region
            Constraint::Length(1), // Login
            Constraint::Length(1), // Password
            Constraint::Length(1), // Section selector
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    let focused = |field: FormField| is_focused && app.form.focused_field == field;

    frame.render_widget(
        Paragraph::new(app.form.username.line(focused(FormField::Username))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(app.form.hashtag.line(focused(FormField::Hashtag))),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(app.form.region.line(focused(FormField::Region))),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(app.form.login.line(focused(FormField::Login))),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(app.form.password.line(focused(FormField::Password))),
        chunks[4],
    );
    frame.render_widget(
        Paragraph::new(section_selector_line(app, focused(FormField::Section))),
        chunks[5],
    );

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Green)),
        Span::raw(" Field  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Back"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Build the section selector line
///
/// When focused it shows cycle arrows; Left/Right step through the
/// sections list.
fn section_selector_line(app: &App, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let name = app
        .form
        .selected_section_name(&app.view_model.sections)
        .unwrap_or_else(|| "(none)".to_string());

    let mut spans = vec![Span::styled("Section: ".to_string(), label_style)];

    if focused {
        spans.push(Span::styled("◂ ", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" ▸", Style::default().fg(Color::Cyan)));
    } else {
        spans.push(Span::styled(name, Style::default().fg(Color::White)));
    }

    Line::from(spans)
}
