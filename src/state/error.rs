use thiserror::Error;

/// Failures raised by the shared state.
///
/// Missing ids are never errors; the only failure is reaching for the state
/// outside a live provider, which is a wiring defect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("analysis editor state accessed outside of an AnalysisEditorProvider")]
    OutsideProvider,
}
