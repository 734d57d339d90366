use crate::state::{Snapshot, View};
use crate::ui::app::App;
use crate::ui::editor::render_editor;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::landing::render_landing;
use crate::ui::layout::{inset, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Render one frame from a snapshot taken just before drawing.
pub fn draw(frame: &mut Frame<'_>, app: &App, snapshot: &Snapshot) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(snapshot), header);
    frame.render_widget(Clear, body);

    let content = inset(body);
    match snapshot.view {
        View::Landing => render_landing(frame, content, app.landing()),
        View::Editor => render_editor(frame, content, app.editor_screen(), snapshot),
    }

    frame.render_widget(
        Footer::new().widget(footer, snapshot.view, app.focus()),
        footer,
    );
}
