use crate::state::{StateError, View};
use crate::ui::app::App;
use crate::ui::editor::EditorFocus;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), StateError> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Raw mode delivers Ctrl+C as a key, so it quits like Ctrl+Q.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return Ok(());
    }

    match app.view()? {
        View::Landing => handle_landing_key(app, key),
        View::Editor => match app.focus() {
            EditorFocus::Outline => handle_outline_key(app, key),
            EditorFocus::Text => handle_text_key(app, key),
        },
    }
}

pub fn handle_paste(app: &mut App, text: &str) -> Result<(), StateError> {
    match app.view()? {
        View::Landing => app.insert_notes(text),
        View::Editor if app.focus() == EditorFocus::Text => {
            app.edit_selected_draft(|draft| draft.push_str(text))?;
        }
        View::Editor => {}
    }
    Ok(())
}

fn handle_landing_key(app: &mut App, key: KeyEvent) -> Result<(), StateError> {
    if is_ctrl_char(key, 's') {
        app.submit_notes()?;
        return Ok(());
    }
    if is_ctrl_char(key, 'x') {
        app.clear_notes();
        return Ok(());
    }

    match key.code {
        KeyCode::Enter => app.insert_notes("\n"),
        KeyCode::Backspace => app.backspace_notes(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut buffer = [0u8; 4];
            app.insert_notes(ch.encode_utf8(&mut buffer));
        }
        _ => {}
    }
    Ok(())
}

fn handle_outline_key(app: &mut App, key: KeyEvent) -> Result<(), StateError> {
    if is_ctrl_char(key, 'a') {
        return app.accept_selected();
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous()?,
        KeyCode::Down | KeyCode::Char('j') => app.select_next()?,
        KeyCode::Enter | KeyCode::Tab | KeyCode::Char('e') => app.focus_text(),
        KeyCode::Char('a') => app.accept_selected()?,
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected()?,
        KeyCode::Char('X') => app.clear_blocks()?,
        KeyCode::Esc => app.back_to_landing()?,
        _ => {}
    }
    Ok(())
}

fn handle_text_key(app: &mut App, key: KeyEvent) -> Result<(), StateError> {
    if is_ctrl_char(key, 'a') {
        return app.accept_selected();
    }

    match key.code {
        KeyCode::Esc | KeyCode::Tab => app.focus_outline(),
        KeyCode::Backspace => app.edit_selected_draft(|draft| {
            draft.pop();
        })?,
        KeyCode::Enter => app.edit_selected_draft(|draft| draft.push('\n'))?,
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_selected_draft(|draft| draft.push(ch))?
        }
        _ => {}
    }
    Ok(())
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
