//! Rendering tests for the account tree and status bar

use std::collections::BTreeMap;
use std::time::Duration;

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use ranktrack::client::{ApiClient, ViewModel};
use ranktrack::config::Settings;
use ranktrack::models::{Account, Section};
use ranktrack::tui::{views, App};

fn test_app() -> App {
    let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
    App::new(client, &Settings::default())
}

fn sample_view_model() -> ViewModel {
    let mut amy = Account::new("Amy", "111", "na");
    amy.section = "Alpha".to_string();
    amy.rank = Some("Gold 2".to_string());
    amy.rr = 45;

    let mut accounts_by_section = BTreeMap::new();
    accounts_by_section.insert("Alpha".to_string(), vec![amy]);
    accounts_by_section.insert("Default".to_string(), vec![]);

    ViewModel {
        sections: vec![Section::new("Alpha"), Section::new("Default")],
        accounts_by_section,
    }
}

fn draw(term: &mut Terminal<TestBackend>, app: &mut App) {
    term.draw(|frame| views::render(frame, app))
        .expect("failed to draw");
}

/// Collect the rendered buffer into one string per row
fn buffer_lines(term: &Terminal<TestBackend>) -> Vec<String> {
    let buf = term.backend().buffer();
    let area = *buf.area();
    (0..area.height)
        .map(|y| {
            let mut row = String::new();
            for x in 0..area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    row.push_str(cell.symbol());
                }
            }
            row
        })
        .collect()
}

fn buffer_text(term: &Terminal<TestBackend>) -> String {
    buffer_lines(term).join("\n")
}

#[test]
fn tree_renders_sections_and_accounts() {
    let backend = TestBackend::new(100, 30);
    let mut term = Terminal::new(backend).unwrap();
    let mut app = test_app();
    app.apply_view_model(sample_view_model());

    draw(&mut term, &mut app);
    let text = buffer_text(&term);

    assert!(text.contains("Alpha (1)"), "missing section header: {text}");
    assert!(text.contains("Amy#111 (NA)"), "missing account row: {text}");
    assert!(text.contains("Gold 2 - 45 RR"), "missing rank summary: {text}");
    assert!(text.contains("Default (0)"), "missing empty section: {text}");
    assert!(text.contains("▾"), "sections should render expanded: {text}");
}

#[test]
fn delete_marker_shows_only_on_deletable_sections() {
    let backend = TestBackend::new(100, 30);
    let mut term = Terminal::new(backend).unwrap();
    let mut app = test_app();
    app.apply_view_model(sample_view_model());

    draw(&mut term, &mut app);
    let lines = buffer_lines(&term);

    let alpha_row = lines
        .iter()
        .find(|l| l.contains("Alpha (1)"))
        .expect("Alpha header row");
    assert!(alpha_row.contains("×"), "Alpha should be deletable: {alpha_row}");

    let default_row = lines
        .iter()
        .find(|l| l.contains("Default (0)"))
        .expect("Default header row");
    assert!(
        !default_row.contains("×"),
        "Default must not show the delete marker: {default_row}"
    );
}

#[test]
fn collapsed_section_hides_account_rows() {
    let backend = TestBackend::new(100, 30);
    let mut term = Terminal::new(backend).unwrap();
    let mut app = test_app();
    app.apply_view_model(sample_view_model());
    app.toggle_section("Alpha");

    draw(&mut term, &mut app);
    let text = buffer_text(&term);

    assert!(text.contains("▸"), "collapsed marker missing: {text}");
    assert!(
        !text.contains("Amy#111"),
        "collapsed section must hide its accounts: {text}"
    );
}

#[test]
fn empty_view_shows_placeholder() {
    let backend = TestBackend::new(100, 30);
    let mut term = Terminal::new(backend).unwrap();
    let mut app = test_app();

    draw(&mut term, &mut app);
    let text = buffer_text(&term);

    assert!(text.contains("No saved accounts"), "missing placeholder: {text}");
}

#[test]
fn status_bar_shows_reload_time_and_count() {
    let backend = TestBackend::new(100, 30);
    let mut term = Terminal::new(backend).unwrap();
    let mut app = test_app();
    app.apply_view_model(sample_view_model());
    app.set_status("Saved Amy#111 (NA)");

    draw(&mut term, &mut app);
    let text = buffer_text(&term);

    assert!(text.contains("Last reload:"), "missing reload stamp: {text}");
    assert!(text.contains("1 accounts"), "missing account count: {text}");
    assert!(text.contains("Saved Amy#111 (NA)"), "missing status message: {text}");
    assert!(text.contains("q:Quit"), "missing key hints: {text}");
}
