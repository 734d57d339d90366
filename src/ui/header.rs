use crate::state::Snapshot;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, SEPARATOR, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, snapshot: &Snapshot) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "DN",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", text_style),
            Span::styled(
                "Design Narrator",
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("view: {}", snapshot.view), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("blocks: {}", snapshot.blocks.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("accepted: {}", snapshot.accepted_blocks().len()),
                text_style,
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
