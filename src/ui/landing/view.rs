use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::{ACCENT, FOCUS_BORDER, MUTED, TEXT};

use super::state::LandingState;

const HEADLINE: &str = "Turn messy screens & notes into portfolio-ready case studies — fast.";
const SUBLINE: &str = "Paste raw text or messy notes. The agents extract structure and build a case study skeleton you can refine in the editor.";
const PLACEHOLDER: &str = "Paste messy notes, raw text, or project thoughts here...";

pub fn render_landing(frame: &mut Frame<'_>, area: Rect, state: &LandingState) {
    let [intro, notes, status] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .areas(area);

    let intro_lines = vec![
        Line::from(Span::styled(
            HEADLINE,
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBLINE, Style::default().fg(MUTED))),
    ];
    frame.render_widget(
        Paragraph::new(intro_lines).wrap(Wrap { trim: true }),
        intro,
    );

    let notes_text = if state.notes.is_empty() {
        Line::from(vec![
            Span::styled("█", Style::default().fg(TEXT)),
            Span::styled(PLACEHOLDER, Style::default().fg(MUTED)),
        ])
        .into()
    } else {
        let mut text = ratatui::text::Text::styled(state.notes.clone(), Style::default().fg(TEXT));
        text.push_span(Span::styled("█", Style::default().fg(TEXT)));
        text
    };
    let notes_block = Block::default()
        .title(Span::styled(" Paste Notes ", Style::default().fg(TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FOCUS_BORDER));
    frame.render_widget(
        Paragraph::new(notes_text)
            .block(notes_block)
            .wrap(Wrap { trim: false }),
        notes,
    );

    let status_line = if state.status.message().is_empty() {
        Line::from(vec![
            Span::styled("Notes will be processed when you press ", Style::default().fg(MUTED)),
            Span::styled(
                "Ctrl+S (Send & Process)",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(".", Style::default().fg(MUTED)),
        ])
    } else {
        Line::from(Span::styled(state.status.message(), Style::default().fg(MUTED)))
    };
    frame.render_widget(Paragraph::new(status_line), status);
}
