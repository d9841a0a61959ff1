//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: account tree on the left, the
//! account form and result panels on the right, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Account tree (sections with their accounts)
    pub tree: Rect,
    /// Account entry form
    pub form: Rect,
    /// Rank lookup result panel
    pub rank: Rect,
    /// Saved credentials panel
    pub credentials: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        // Split into main area and status bar
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // Split main area into tree and detail column
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(36),    // Account tree
                Constraint::Length(46), // Form and panels
            ])
            .split(vertical[0]);

        // Stack the detail column: form, rank result, credentials
        let detail = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // Account form
                Constraint::Length(6),  // Rank result
                Constraint::Length(5),  // Credentials
                Constraint::Min(0),     // Remaining
            ])
            .split(horizontal[1]);

        Self {
            tree: horizontal[0],
            form: detail[0],
            rank: detail[1],
            credentials: detail[2],
            status_bar: vertical[1],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
