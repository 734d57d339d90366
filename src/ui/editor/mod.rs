//! Editor screen: outline of blocks, per-block drafts, accept.
//!
//! # Architecture
//!
//! - `drafts.rs` - per-block scratch copy of `extracted_text`
//! - `state.rs` - selection, focus, drafts
//! - `intent.rs` - gestures plus `Sync` from the shared state
//! - `reducer.rs` - state transitions (pure)
//! - `view.rs` - rendering
//!
//! Writing a draft back to the block store is a side effect, so the `App`
//! calls `AnalysisEditor::update` right after dispatching `SetDraft`.

mod drafts;
mod intent;
mod reducer;
mod state;
mod view;

pub use drafts::DraftBuffer;
pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditorFocus, EditorState};
pub use view::render_editor;
