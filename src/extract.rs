//! Note-to-block conversion.
//!
//! The real extraction is an external collaborator; [`SampleExtractor`] is a
//! small deterministic stand-in so a session is reproducible.

use crate::state::Block;

pub const DEFAULT_SNIPPET_LIMIT: usize = 220;

const PROBLEM_FALLBACK: &str = "Users were confused about the workflow.";
const RESEARCH_FALLBACK: &str = "Research shows progress indicators were missed.";

/// Turns free-form notes into candidate blocks.
///
/// Ids must be unique within one call. Returning an id that already exists
/// in the store makes the record an update of that block.
pub trait NoteProcessor: Send + Sync {
    fn extract(&self, notes: &str) -> Vec<Block>;
}

/// Produces a fixed `b1` problem block and `b2` research block.
///
/// Because the ids never change, submitting twice overwrites the same two
/// blocks instead of appending.
#[derive(Debug, Clone, Copy)]
pub struct SampleExtractor {
    snippet_limit: usize,
}

impl Default for SampleExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SNIPPET_LIMIT)
    }
}

impl SampleExtractor {
    pub fn new(snippet_limit: usize) -> Self {
        Self { snippet_limit }
    }

    /// Trimmed notes, cut to at most `snippet_limit` characters.
    pub fn snippet(&self, notes: &str) -> String {
        notes.trim().chars().take(self.snippet_limit).collect()
    }
}

impl NoteProcessor for SampleExtractor {
    fn extract(&self, notes: &str) -> Vec<Block> {
        let snippet = self.snippet(notes);
        let (problem, research) = if snippet.is_empty() {
            (PROBLEM_FALLBACK.to_string(), RESEARCH_FALLBACK.to_string())
        } else {
            (snippet.clone(), format!("Notes: {snippet}"))
        };

        vec![
            Block::new("b1", "Problem", "Problem summary", problem),
            Block::new("b2", "Research", "Research note", research),
        ]
    }
}
