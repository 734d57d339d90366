//! Draws whole frames into a `TestBackend` and checks the visible text.

mod common;

use common::*;
use narrator::scheduler::ProcessingEvent;
use narrator::state::AnalysisEditorProvider;
use narrator::ui::app::App;
use narrator::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(app: &App) -> String {
    let snapshot = app.snapshot().unwrap();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app, &snapshot)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn landing_shows_notes_and_status() {
    let provider = AnalysisEditorProvider::new();
    let mut app = make_app(&provider);
    type_text(&mut app, "checkout is slow");
    app.submit_notes().unwrap();

    let screen = render(&app);
    assert!(screen.contains("checkout is slow"));
    assert!(screen.contains("Notes submitted for processing."));
    assert!(screen.contains("view: landing"));
}

#[test]
fn editor_lists_blocks_and_accepted_count() {
    let provider = AnalysisEditorProvider::new();
    let mut app = make_app(&provider);
    type_text(&mut app, "checkout is slow");
    let submission = app.submit_notes().unwrap();
    app.on_processing(ProcessingEvent::OpenEditor { submission })
        .unwrap();
    app.accept_selected().unwrap();

    let screen = render(&app);
    assert!(screen.contains("view: editor"));
    assert!(screen.contains("Problem summary"));
    assert!(screen.contains("Research note"));
    assert!(screen.contains("accepted: 1"));
}

#[test]
fn empty_editor_still_draws() {
    let provider = AnalysisEditorProvider::new();
    let mut app = make_app(&provider);
    let submission = app.submit_notes().unwrap();
    app.on_processing(ProcessingEvent::OpenEditor { submission })
        .unwrap();
    app.clear_blocks().unwrap();

    let screen = render(&app);
    assert!(screen.contains("blocks: 0"));
}
