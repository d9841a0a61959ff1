//! New-section entry dialog
//!
//! Modal dialog for creating a section, with empty-name validation and
//! the server's error shown inline when creation fails.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the new-section dialog
#[derive(Debug, Clone)]
pub struct SectionFormState {
    /// Name input
    pub name_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for SectionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionFormState {
    /// Create a new form state
    pub fn new() -> Self {
        Self {
            name_input: TextInput::new()
                .label("Name")
                .placeholder("e.g. Smurfs, Mains"),
            error_message: None,
        }
    }

    /// Validate the form and return any error
    pub fn validate(&self) -> Result<(), String> {
        if self.name_input.value().trim().is_empty() {
            return Err("Section name cannot be empty.".to_string());
        }
        Ok(())
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the new-section dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(50, 8, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Section ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    // Inner area for content
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Buttons
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    // The name field is the only field, so it is always focused
    frame.render_widget(
        Paragraph::new(app.section_form.name_input.line(true)),
        chunks[0],
    );

    if let Some(ref error) = app.section_form.error_message {
        let error_line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[2]);
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Create  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}

/// Handle key input for the new-section dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Enter => {
            if let Err(e) = create_section(app) {
                app.section_form.set_error(e);
            }
        }

        KeyCode::Backspace => {
            app.section_form.clear_error();
            app.section_form.name_input.backspace();
        }

        KeyCode::Delete => {
            app.section_form.clear_error();
            app.section_form.name_input.delete();
        }

        KeyCode::Left => {
            app.section_form.name_input.move_left();
        }

        KeyCode::Right => {
            app.section_form.name_input.move_right();
        }

        KeyCode::Home => {
            app.section_form.name_input.move_start();
        }

        KeyCode::End => {
            app.section_form.name_input.move_end();
        }

        KeyCode::Char(c) => {
            app.section_form.clear_error();
            app.section_form.name_input.insert(c);
        }

        _ => {}
    }
}

/// Create the section on the server
fn create_section(app: &mut App) -> Result<(), String> {
    app.section_form.validate()?;

    let name = app.section_form.name_input.value().trim().to_string();

    app.client
        .create_section(&name)
        .map_err(|e| e.user_message())?;

    app.close_dialog();
    app.reload();
    app.set_status(format!("Section '{}' created", name));

    Ok(())
}
