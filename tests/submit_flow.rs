//! End-to-end flow from landing notes to the editor, driven by key events.

mod common;

use std::sync::mpsc;
use std::time::Duration;

use common::*;
use crossterm::event::KeyCode;
use narrator::config::ProcessingConfig;
use narrator::scheduler::{ProcessingEvent, ProcessingScheduler};
use narrator::state::{AnalysisEditorProvider, View};
use narrator::ui::editor::EditorFocus;
use narrator::ui::events::AppEvent;
use narrator::ui::input::{handle_key, handle_paste};
use narrator::ui::landing::LandingStatus;

// -- Manual event delivery ---------------------------------------------------

#[test]
fn submit_merges_blocks_before_editor_opens() {
    let provider = AnalysisEditorProvider::new();
    let mut app = make_app(&provider);

    type_text(&mut app, "Users got lost during onboarding");
    handle_key(&mut app, ctrl_key('s')).unwrap();

    let snapshot = provider.editor().snapshot();
    assert_eq!(snapshot.view, View::Landing);
    assert_eq!(snapshot.blocks.len(), 2);
    assert_eq!(
        snapshot.block("b1").unwrap().extracted_text,
        "Users got lost during onboarding"
    );
    assert_eq!(
        snapshot.block("b2").unwrap().extracted_text,
        "Notes: Users got lost during onboarding"
    );
    assert_eq!(app.landing().status, LandingStatus::Submitted);
    assert!(app.landing().is_processing());

    app.on_processing(ProcessingEvent::Complete { submission: 1 })
        .unwrap();
    assert_eq!(app.landing().status, LandingStatus::ProcessingComplete);
    assert_eq!(provider.editor().view(), View::Landing);

    app.on_processing(ProcessingEvent::OpenEditor { submission: 1 })
        .unwrap();
    assert_eq!(provider.editor().view(), View::Editor);
    assert_eq!(app.editor_screen().selected(), Some("b1"));
    assert!(!app.landing().is_processing());
}

#[test]
fn empty_notes_use_fallback_text() {
    let provider = AnalysisEditorProvider::new();
    let mut app = make_app(&provider);

    type_text(&mut app, "   ");
    handle_key(&mut app, ctrl_key('s')).unwrap();

    let b1 = provider.editor().block("b1").unwrap();
    assert_eq!(b1.extracted_text, "Users were confused about the workflow.");
}

#[test]
fn resubmitting_overwrites_same_blocks() {
    let provider = AnalysisEditorProvider::new();
    let mut app = make_app(&provider);

    type_text(&mut app, "first");
    handle_key(&mut app, ctrl_key('s')).unwrap();
    provider.editor().accept("b1");

    handle_key(&mut app, ctrl_key('x')).unwrap();
    type_text(&mut app, "second");
    handle_key(&mut app, ctrl_key('s')).unwrap();

    let editor = provider.editor();
    assert_eq!(ids(editor), vec!["b1", "b2"]);
    let b1 = editor.block("b1").unwrap();
    assert_eq!(b1.extracted_text, "second");
    assert!(b1.accepted, "acceptance survives a re-merge of the same id");
    assert_consistent(editor);
}

// -- Editor interaction ------------------------------------------------------

fn open_editor_with(notes: &str) -> (AnalysisEditorProvider, narrator::ui::app::App) {
    let provider = AnalysisEditorProvider::new();
    let mut app = make_app(&provider);
    type_text(&mut app, notes);
    let submission = app.submit_notes().unwrap();
    app.on_processing(ProcessingEvent::OpenEditor { submission })
        .unwrap();
    (provider, app)
}

#[test]
fn accept_from_outline_marks_selected_block() {
    let (provider, mut app) = open_editor_with("checkout is slow");

    handle_key(&mut app, press_key(KeyCode::Down)).unwrap();
    assert_eq!(app.editor_screen().selected(), Some("b2"));
    handle_key(&mut app, press_key(KeyCode::Char('a'))).unwrap();

    let snapshot = provider.editor().snapshot();
    assert!(snapshot.is_accepted("b2"));
    assert!(snapshot.block("b2").unwrap().accepted);
    assert!(!snapshot.block("b1").unwrap().accepted);
}

#[test]
fn selection_wraps_around() {
    let (_provider, mut app) = open_editor_with("notes");

    handle_key(&mut app, press_key(KeyCode::Up)).unwrap();
    assert_eq!(app.editor_screen().selected(), Some("b2"));
    handle_key(&mut app, press_key(KeyCode::Down)).unwrap();
    assert_eq!(app.editor_screen().selected(), Some("b1"));
}

#[test]
fn typing_in_text_pane_writes_through_to_store() {
    let (provider, mut app) = open_editor_with("abc");

    handle_key(&mut app, press_key(KeyCode::Enter)).unwrap();
    assert_eq!(app.focus(), EditorFocus::Text);

    handle_key(&mut app, press_key(KeyCode::Backspace)).unwrap();
    type_text(&mut app, "!");
    handle_paste(&mut app, " more").unwrap();

    assert_eq!(app.editor_screen().selected_draft(), Some("ab! more"));
    assert_eq!(provider.editor().block("b1").unwrap().extracted_text, "ab! more");

    handle_key(&mut app, press_key(KeyCode::Esc)).unwrap();
    assert_eq!(app.focus(), EditorFocus::Outline);
}

#[test]
fn removing_selected_block_moves_selection() {
    let (provider, mut app) = open_editor_with("notes");
    provider.editor().accept("b1");

    handle_key(&mut app, press_key(KeyCode::Char('d'))).unwrap();

    assert_eq!(ids(provider.editor()), vec!["b2"]);
    assert!(!provider.editor().is_accepted("b1"));
    assert_eq!(app.editor_screen().selected(), Some("b2"));
}

#[test]
fn clear_all_empties_editor_without_leaving_it() {
    let (provider, mut app) = open_editor_with("notes");

    handle_key(&mut app, press_key(KeyCode::Char('X'))).unwrap();

    assert!(provider.editor().blocks().is_empty());
    assert_eq!(provider.editor().view(), View::Editor);
    assert_eq!(app.editor_screen().selected(), None);
}

#[test]
fn escape_on_outline_returns_to_landing() {
    let (provider, mut app) = open_editor_with("notes");

    handle_key(&mut app, press_key(KeyCode::Esc)).unwrap();

    assert_eq!(provider.editor().view(), View::Landing);
    assert_eq!(app.editor_screen().selected(), None);
    assert_eq!(provider.editor().blocks().len(), 2);
}

#[test]
fn ctrl_q_quits_from_any_screen() {
    let (_provider, mut app) = open_editor_with("notes");
    handle_key(&mut app, ctrl_key('q')).unwrap();
    assert!(app.should_quit());
}

#[test]
fn keys_fail_once_provider_is_gone() {
    let provider = AnalysisEditorProvider::new();
    let mut app = make_app(&provider);
    drop(provider);

    assert!(handle_key(&mut app, press_key(KeyCode::Char('a'))).is_err());
}

// -- Real scheduler ----------------------------------------------------------

#[test]
fn scheduler_delivers_complete_then_open() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .unwrap();
    let (tx, rx) = mpsc::channel::<AppEvent>();
    let config = ProcessingConfig {
        complete_delay_ms: 10,
        open_delay_ms: 5,
        ..ProcessingConfig::default()
    };

    let provider = AnalysisEditorProvider::new();
    let mut app = make_app(&provider);
    app.set_scheduler(ProcessingScheduler::new(runtime.handle().clone(), tx, &config));

    type_text(&mut app, "Users got lost during onboarding");
    handle_key(&mut app, ctrl_key('s')).unwrap();

    let mut seen = Vec::new();
    while provider.editor().view() != View::Editor {
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppEvent::Processing(event) => {
                seen.push(event);
                app.on_processing(event).unwrap();
            }
            _ => panic!("unexpected event"),
        }
    }

    assert_eq!(
        seen,
        vec![
            ProcessingEvent::Complete { submission: 1 },
            ProcessingEvent::OpenEditor { submission: 1 },
        ]
    );
    assert_eq!(app.editor_screen().selected(), Some("b1"));
}
