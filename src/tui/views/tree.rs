//! Account tree view
//!
//! Shows every section as a header row with its accounts nested under it.
//! Headers carry an expand marker and, for deletable sections, a delete
//! marker; the Default section never shows one.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedPanel, TreeRow};

/// Render the account tree
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Tree;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Saved Accounts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let rows = app.visible_rows();

    if rows.is_empty() {
        let text = Paragraph::new("No saved accounts")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = rows.iter().map(|row| row_item(app, row)).collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.selected_row));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Build the list item for one tree row
fn row_item(app: &App, row: &TreeRow) -> ListItem<'static> {
    match row {
        TreeRow::Section {
            name,
            expanded,
            deletable,
            count,
        } => {
            let marker = if *expanded { "▾ " } else { "▸ " };
            let mut spans = vec![
                Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
                Span::styled(
                    name.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" ({})", count), Style::default().fg(Color::DarkGray)),
            ];
            if *deletable {
                spans.push(Span::styled("  ×", Style::default().fg(Color::Red)));
            }
            ListItem::new(Line::from(spans))
        }
        TreeRow::Account { section, index } => {
            // The row list and the view-model are rebuilt together, so a
            // miss here only happens mid-collapse; render it blank.
            let Some(account) = app.account_at(section, *index) else {
                return ListItem::new(Line::from(""));
            };

            let line = Line::from(vec![
                Span::raw("    "),
                Span::styled(account.label(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(
                    account.rank_summary(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        }
    }
}
