use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingIntent {
    /// Typed or pasted text, appended to the notes.
    Insert(String),
    Backspace,
    /// Empty the notes and the status line.
    Clear,
    /// Notes were sent; blocks are already merged.
    Submitted { submission: u64 },
    ProcessingComplete { submission: u64 },
    /// The editor was opened for this submission.
    Opened { submission: u64 },
}

impl Intent for LandingIntent {}
