//! Model-View-Intent (MVI) primitives for the screens.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── App (side effects) ──┘
//! ```
//!
//! - **State**: screen-local data needed to render
//! - **Intent**: key gestures and scheduler events
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Shared session data (blocks, acceptance, view) is not screen state; it
//! lives in [`crate::state`] and the `App` touches it around each dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
