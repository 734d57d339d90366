use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::Snapshot;
use crate::ui::theme::{ACCEPTED, FOCUS_BORDER, GLOBAL_BORDER, MUTED, SELECTED_BG, TEXT};

use super::state::{EditorFocus, EditorState};

const PREVIEW_CHARS: usize = 40;

pub fn render_editor(frame: &mut Frame<'_>, area: Rect, state: &EditorState, snapshot: &Snapshot) {
    let [outline, detail] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(area);

    render_outline(frame, outline, state, snapshot);
    render_detail(frame, detail, state, snapshot);
}

fn pane(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(format!(" {title} "), Style::default().fg(TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_outline(frame: &mut Frame<'_>, area: Rect, state: &EditorState, snapshot: &Snapshot) {
    let block = pane("Outline", state.focus == EditorFocus::Outline);

    if snapshot.blocks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No blocks yet.",
            Style::default().fg(MUTED),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = snapshot
        .blocks
        .iter()
        .map(|b| {
            let mut kind = vec![Span::styled(b.kind.clone(), Style::default().fg(MUTED))];
            if b.accepted {
                kind.push(Span::styled("  ✓ accepted", Style::default().fg(ACCEPTED)));
            }
            ListItem::new(vec![
                Line::from(kind),
                Line::from(Span::styled(
                    b.title.clone(),
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(preview(&b.extracted_text), Style::default().fg(MUTED))),
                Line::from(""),
            ])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(
        state
            .selected()
            .and_then(|id| snapshot.blocks.iter().position(|b| b.id == id)),
    );

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(SELECTED_BG));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(frame: &mut Frame<'_>, area: Rect, state: &EditorState, snapshot: &Snapshot) {
    let focused = state.focus == EditorFocus::Text;
    let Some(selected) = state.selected().and_then(|id| snapshot.block(id)) else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No block selected.",
            Style::default().fg(MUTED),
        )))
        .block(pane("Editor", focused));
        frame.render_widget(empty, area);
        return;
    };

    let [body, note] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let title = if selected.accepted {
        format!("Editing — {} (accepted)", selected.title)
    } else {
        format!("Editing — {}", selected.title)
    };

    let draft = state.selected_draft().unwrap_or_default();
    let mut text = Text::styled(draft.to_string(), Style::default().fg(TEXT));
    if focused {
        text.push_span(Span::styled("█", Style::default().fg(TEXT)));
    }

    frame.render_widget(
        Paragraph::new(text)
            .block(pane(&title, focused))
            .wrap(Wrap { trim: false }),
        body,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            " All edits are local to this session.",
            Style::default().fg(MUTED),
        )),
        note,
    );
}

fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let mut preview: String = first_line.chars().take(PREVIEW_CHARS).collect();
    if first_line.chars().count() > PREVIEW_CHARS || text.lines().nth(1).is_some() {
        preview.push('…');
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_truncates_long_and_multiline_text() {
        assert_eq!(preview("short"), "short");
        assert_eq!(preview("line one\nline two"), "line one…");
        let long = "x".repeat(60);
        assert_eq!(preview(&long).chars().count(), 41);
    }
}
