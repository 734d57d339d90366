//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where a screen's state changes.
///
/// Must be pure: reading or writing the shared session state belongs to the
/// caller, before or after `reduce`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
