use crate::state::Block;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// The block list changed: rebuild drafts and fix up the selection.
    Sync { blocks: Vec<Block>, revision: u64 },
    Select { id: String },
    /// Move selection within `order`, wrapping at the top.
    MoveUp { order: Vec<String> },
    /// Move selection within `order`, wrapping at the bottom.
    MoveDown { order: Vec<String> },
    SetDraft { id: String, text: String },
    FocusText,
    FocusOutline,
    /// The screen was torn down.
    Reset,
}

impl Intent for EditorIntent {}
