use crate::state::View;
use crate::ui::editor::EditorFocus;
use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(view: View, focus: EditorFocus) -> &'static str {
        match (view, focus) {
            (View::Landing, _) => " Ctrl+S: Send & Process │ Ctrl+X: Clear │ Ctrl+Q: Quit",
            (View::Editor, EditorFocus::Outline) => {
                " ↑/↓: Select │ Enter: Edit │ a: Accept │ d: Remove │ X: Clear all │ Esc: Back │ Ctrl+Q: Quit"
            }
            (View::Editor, EditorFocus::Text) => {
                " Type to edit │ Ctrl+A: Accept │ Esc: Outline │ Ctrl+Q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect, view: View, focus: EditorFocus) -> Paragraph<'static> {
        let hints = Self::hints(view, focus);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
