//! Shared test builders.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use narrator::extract::SampleExtractor;
use narrator::state::{AnalysisEditor, AnalysisEditorProvider, Block};
use narrator::ui::app::App;
use narrator::ui::input::handle_key;

pub fn block(id: &str) -> Block {
    Block::new(id, "Problem", format!("{id} title"), format!("{id} text"))
}

pub fn blocks(ids: &[&str]) -> Vec<Block> {
    ids.iter().map(|id| block(id)).collect()
}

pub fn ids(editor: &AnalysisEditor) -> Vec<String> {
    editor.blocks().into_iter().map(|b| b.id).collect()
}

/// Every block's flag matches acceptance membership.
pub fn assert_consistent(editor: &AnalysisEditor) {
    let snapshot = editor.snapshot();
    for block in &snapshot.blocks {
        assert_eq!(
            block.accepted,
            snapshot.accepted_ids.contains(&block.id),
            "accepted flag diverged for {}",
            block.id
        );
    }
}

pub fn make_app(provider: &AnalysisEditorProvider) -> App {
    App::new(provider.context(), Box::new(SampleExtractor::default()))
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        let key = if ch == '\n' {
            press_key(KeyCode::Enter)
        } else {
            press_key(KeyCode::Char(ch))
        };
        handle_key(app, key).unwrap();
    }
}
