//! Rank result panel
//!
//! Shows the outcome of the last rank lookup, or the stored rank of the
//! selected account. Hidden entirely when there is nothing to show; an
//! error replaces the result lines so stale rank text never survives a
//! failed lookup.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, RankPanel};

/// Render the rank panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    match &app.rank_panel {
        RankPanel::Hidden => {}
        RankPanel::Result(rank) => {
            let block = Block::default()
                .title(" Rank ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green));

            let lines = vec![
                Line::from(Span::styled(
                    rank.player_name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Rank: {}", rank.rank_text())),
                Line::from(format!("Rank Rating (RR): {}", rank.rr)),
            ];

            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
        RankPanel::Error(message) => {
            let block = Block::default()
                .title(" Rank ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red));

            let line = Line::from(Span::styled(
                format!("Error: {}", message),
                Style::default().fg(Color::Red),
            ));

            frame.render_widget(
                Paragraph::new(line).block(block).wrap(Wrap { trim: false }),
                area,
            );
        }
    }
}
