use crate::ui::mvi::UiState;

/// Status line under the notes field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LandingStatus {
    #[default]
    Idle,
    Submitted,
    ProcessingComplete,
}

impl LandingStatus {
    pub fn message(self) -> &'static str {
        match self {
            LandingStatus::Idle => "",
            LandingStatus::Submitted => "Notes submitted for processing.",
            LandingStatus::ProcessingComplete => "Processing complete — opening editor.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandingState {
    pub notes: String,
    pub status: LandingStatus,
    /// Latest submission whose editor switch has not happened yet.
    pub pending: Option<u64>,
}

impl UiState for LandingState {}

impl LandingState {
    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }
}
