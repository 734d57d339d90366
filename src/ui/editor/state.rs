use crate::ui::mvi::UiState;

use super::drafts::DraftBuffer;

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    #[default]
    Outline,
    Text,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub selected: Option<String>,
    pub drafts: DraftBuffer,
    pub focus: EditorFocus,
    /// Revision of the block list the drafts were built from.
    pub synced_revision: Option<u64>,
}

impl UiState for EditorState {}

impl EditorState {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_synced(&self, revision: u64) -> bool {
        self.synced_revision == Some(revision)
    }

    /// Draft of the selected block, if any.
    pub fn selected_draft(&self) -> Option<&str> {
        self.selected().and_then(|id| self.drafts.get(id))
    }
}
