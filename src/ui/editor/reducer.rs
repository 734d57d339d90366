use crate::ui::mvi::Reducer;

use super::drafts::DraftBuffer;
use super::intent::EditorIntent;
use super::state::{EditorFocus, EditorState};

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Sync { blocks, revision } => {
                let selected = state
                    .selected
                    .filter(|id| blocks.iter().any(|block| &block.id == id))
                    .or_else(|| blocks.first().map(|block| block.id.clone()));
                let focus = if selected.is_some() {
                    state.focus
                } else {
                    EditorFocus::Outline
                };
                EditorState {
                    selected,
                    drafts: DraftBuffer::from_blocks(&blocks),
                    focus,
                    synced_revision: Some(revision),
                }
            }
            EditorIntent::Select { id } => EditorState {
                selected: Some(id),
                ..state
            },
            EditorIntent::MoveUp { order } => {
                let selected = step(&order, state.selected.as_deref(), -1);
                EditorState { selected, ..state }
            }
            EditorIntent::MoveDown { order } => {
                let selected = step(&order, state.selected.as_deref(), 1);
                EditorState { selected, ..state }
            }
            EditorIntent::SetDraft { id, text } => {
                let mut drafts = state.drafts;
                drafts.set(&id, text);
                EditorState { drafts, ..state }
            }
            EditorIntent::FocusText => match state.selected {
                Some(_) => EditorState {
                    focus: EditorFocus::Text,
                    ..state
                },
                None => state,
            },
            EditorIntent::FocusOutline => EditorState {
                focus: EditorFocus::Outline,
                ..state
            },
            EditorIntent::Reset => EditorState::default(),
        }
    }
}

fn step(order: &[String], current: Option<&str>, direction: i32) -> Option<String> {
    if order.is_empty() {
        return None;
    }
    let len = order.len();
    let Some(index) = current.and_then(|id| order.iter().position(|candidate| candidate == id))
    else {
        return order.first().cloned();
    };

    let next = if direction.is_negative() {
        if index == 0 {
            len - 1
        } else {
            index - 1
        }
    } else if index + 1 >= len {
        0
    } else {
        index + 1
    };
    order.get(next).cloned()
}
