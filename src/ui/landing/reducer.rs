use crate::ui::mvi::Reducer;

use super::intent::LandingIntent;
use super::state::{LandingState, LandingStatus};

pub struct LandingReducer;

impl Reducer for LandingReducer {
    type State = LandingState;
    type Intent = LandingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LandingIntent::Insert(text) => {
                let mut notes = state.notes;
                notes.push_str(&text);
                LandingState { notes, ..state }
            }
            LandingIntent::Backspace => {
                let mut notes = state.notes;
                notes.pop();
                LandingState { notes, ..state }
            }
            // Timers already in flight keep running and will set the status again.
            LandingIntent::Clear => LandingState {
                notes: String::new(),
                status: LandingStatus::Idle,
                ..state
            },
            LandingIntent::Submitted { submission } => LandingState {
                status: LandingStatus::Submitted,
                pending: Some(submission),
                ..state
            },
            LandingIntent::ProcessingComplete { .. } => LandingState {
                status: LandingStatus::ProcessingComplete,
                ..state
            },
            LandingIntent::Opened { submission } => {
                let pending = match state.pending {
                    Some(current) if current == submission => None,
                    other => other,
                };
                LandingState {
                    status: LandingStatus::Idle,
                    pending,
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_notes(notes: &str) -> LandingState {
        LandingState {
            notes: notes.to_string(),
            ..LandingState::default()
        }
    }

    #[test]
    fn insert_and_backspace_edit_notes() {
        let state = LandingReducer::reduce(with_notes("ab"), LandingIntent::Insert("cé".into()));
        assert_eq!(state.notes, "abcé");
        let state = LandingReducer::reduce(state, LandingIntent::Backspace);
        assert_eq!(state.notes, "abc");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let state = LandingReducer::reduce(LandingState::default(), LandingIntent::Backspace);
        assert_eq!(state, LandingState::default());
    }

    #[test]
    fn submission_lifecycle_drives_status() {
        let state = LandingReducer::reduce(
            with_notes("notes"),
            LandingIntent::Submitted { submission: 1 },
        );
        assert_eq!(state.status, LandingStatus::Submitted);
        assert!(state.is_processing());
        assert_eq!(state.notes, "notes");

        let state =
            LandingReducer::reduce(state, LandingIntent::ProcessingComplete { submission: 1 });
        assert_eq!(state.status.message(), "Processing complete — opening editor.");

        let state = LandingReducer::reduce(state, LandingIntent::Opened { submission: 1 });
        assert_eq!(state.status, LandingStatus::Idle);
        assert!(!state.is_processing());
    }

    #[test]
    fn older_open_keeps_newer_submission_pending() {
        let state = LandingReducer::reduce(
            LandingState::default(),
            LandingIntent::Submitted { submission: 2 },
        );
        let state = LandingReducer::reduce(state, LandingIntent::Opened { submission: 1 });
        assert_eq!(state.pending, Some(2));
    }

    #[test]
    fn clear_resets_notes_and_status() {
        let state = LandingReducer::reduce(
            with_notes("notes"),
            LandingIntent::Submitted { submission: 1 },
        );
        let state = LandingReducer::reduce(state, LandingIntent::Clear);
        assert!(state.notes.is_empty());
        assert_eq!(state.status, LandingStatus::Idle);
        assert_eq!(state.pending, Some(1));
    }
}
