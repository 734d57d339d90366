//! Session-scoped ownership of the analysis/editor state.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::error::StateError;
use super::facade::{AnalysisEditor, EditorInner};

/// Owns the state for one session.
///
/// Screens never get the state directly; they get an [`EditorContext`] that
/// stays valid only while this provider is alive.
pub struct AnalysisEditorProvider {
    editor: AnalysisEditor,
}

impl Default for AnalysisEditorProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEditorProvider {
    pub fn new() -> Self {
        Self {
            editor: AnalysisEditor::new(),
        }
    }

    /// Owner-side access to the state.
    pub fn editor(&self) -> &AnalysisEditor {
        &self.editor
    }

    /// Handle to pass to screens and other collaborators.
    pub fn context(&self) -> EditorContext {
        EditorContext {
            inner: Some(Arc::downgrade(self.editor.shared())),
        }
    }
}

/// Access handle for the state owned by an [`AnalysisEditorProvider`].
#[derive(Clone, Default)]
pub struct EditorContext {
    inner: Option<Weak<RwLock<EditorInner>>>,
}

impl EditorContext {
    /// A context with no provider behind it. Every access fails.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Resolve the live state.
    ///
    /// Fails with [`StateError::OutsideProvider`] if this context was never
    /// attached or its provider has been dropped.
    pub fn editor(&self) -> Result<AnalysisEditor, StateError> {
        self.inner
            .as_ref()
            .and_then(Weak::upgrade)
            .map(AnalysisEditor::from_shared)
            .ok_or(StateError::OutsideProvider)
    }

    pub fn is_attached(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Block;

    #[test]
    fn context_sees_provider_state() {
        let provider = AnalysisEditorProvider::new();
        provider
            .editor()
            .merge(vec![Block::new("b1", "Problem", "t", "x")]);
        let ctx = provider.context();
        assert!(ctx.is_attached());
        assert_eq!(ctx.editor().unwrap().blocks().len(), 1);
    }

    #[test]
    fn detached_context_fails() {
        let ctx = EditorContext::detached();
        assert!(!ctx.is_attached());
        assert_eq!(ctx.editor().err(), Some(StateError::OutsideProvider));
    }

    #[test]
    fn context_outliving_provider_fails() {
        let provider = AnalysisEditorProvider::new();
        let ctx = provider.context();
        drop(provider);
        assert!(!ctx.is_attached());
        assert!(matches!(ctx.editor(), Err(StateError::OutsideProvider)));
    }
}
