//! Shared state for the landing and editor screens.
//!
//! ```text
//! AnalysisEditorProvider ──owns──→ AnalysisEditor
//!        │                          ├── BlockStore          (ordered, keyed by id)
//!        │                          ├── AcceptanceTracker   (accepted ids)
//!        └──context()──→ EditorContext                       └── ViewController
//! ```
//!
//! Screens resolve the state through an [`EditorContext`]; doing so without a
//! live provider is the only error this module raises.

mod accepted;
mod block;
mod error;
mod facade;
mod provider;
mod store;
mod view;

pub use accepted::AcceptanceTracker;
pub use block::{Block, BlockPatch};
pub use error::StateError;
pub use facade::{AnalysisEditor, Snapshot};
pub use provider::{AnalysisEditorProvider, EditorContext};
pub use store::BlockStore;
pub use view::{View, ViewController};
