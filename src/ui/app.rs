use crate::extract::NoteProcessor;
use crate::scheduler::{ProcessingEvent, ProcessingScheduler};
use crate::state::{AnalysisEditor, BlockPatch, EditorContext, Snapshot, StateError, View};
use crate::ui::editor::{EditorFocus, EditorIntent, EditorReducer, EditorState};
use crate::ui::events::AppEvent;
use crate::ui::landing::{LandingIntent, LandingReducer, LandingState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Screen-level controller.
///
/// Holds the screen-local MVI states and an [`EditorContext`] to the shared
/// session state. Every method that touches the shared state resolves the
/// context first and fails with [`StateError::OutsideProvider`] when the
/// provider is gone.
pub struct App {
    should_quit: bool,
    context: EditorContext,
    processor: Box<dyn NoteProcessor>,
    /// Delivers processing events; without one, submissions never open the editor.
    scheduler: Option<ProcessingScheduler<AppEvent>>,
    submissions: u64,
    /// Landing screen state (MVI pattern).
    landing: LandingState,
    /// Editor screen state (MVI pattern).
    editor_screen: EditorState,
}

impl App {
    pub fn new(context: EditorContext, processor: Box<dyn NoteProcessor>) -> Self {
        Self {
            should_quit: false,
            context,
            processor,
            scheduler: None,
            submissions: 0,
            landing: LandingState::default(),
            editor_screen: EditorState::default(),
        }
    }

    pub fn set_scheduler(&mut self, scheduler: ProcessingScheduler<AppEvent>) {
        self.scheduler = Some(scheduler);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    fn editor(&self) -> Result<AnalysisEditor, StateError> {
        self.context.editor()
    }

    pub fn view(&self) -> Result<View, StateError> {
        Ok(self.editor()?.view())
    }

    pub fn snapshot(&self) -> Result<Snapshot, StateError> {
        Ok(self.editor()?.snapshot())
    }

    pub fn landing(&self) -> &LandingState {
        &self.landing
    }

    pub fn editor_screen(&self) -> &EditorState {
        &self.editor_screen
    }

    pub fn focus(&self) -> EditorFocus {
        self.editor_screen.focus
    }

    /// Bring screen-local state in line with the shared state.
    ///
    /// On the editor, drafts are rebuilt when the block list revision moved.
    /// Leaving the editor tears its state down.
    pub fn sync(&mut self) -> Result<(), StateError> {
        let snapshot = self.snapshot()?;
        match snapshot.view {
            View::Editor => {
                if !self.editor_screen.is_synced(snapshot.revision) {
                    self.dispatch_editor(EditorIntent::Sync {
                        blocks: snapshot.blocks,
                        revision: snapshot.revision,
                    });
                }
            }
            View::Landing => {
                if self.editor_screen != EditorState::default() {
                    self.dispatch_editor(EditorIntent::Reset);
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Landing screen
    // ========================================================================

    pub fn insert_notes(&mut self, text: &str) {
        self.dispatch_landing(LandingIntent::Insert(text.to_string()));
    }

    pub fn backspace_notes(&mut self) {
        self.dispatch_landing(LandingIntent::Backspace);
    }

    pub fn clear_notes(&mut self) {
        self.dispatch_landing(LandingIntent::Clear);
    }

    /// Extract blocks from the notes, merge them, and schedule the editor switch.
    ///
    /// Returns the submission number.
    pub fn submit_notes(&mut self) -> Result<u64, StateError> {
        let editor = self.editor()?;
        let blocks = self.processor.extract(&self.landing.notes);
        tracing::info!(
            blocks = blocks.len(),
            chars = self.landing.notes.chars().count(),
            "Notes submitted"
        );
        editor.merge(blocks);

        self.submissions += 1;
        let submission = self.submissions;
        match &self.scheduler {
            Some(scheduler) => scheduler.schedule(submission),
            None => tracing::debug!(submission, "No scheduler attached, editor will not open"),
        }
        self.dispatch_landing(LandingIntent::Submitted { submission });
        Ok(submission)
    }

    pub fn on_processing(&mut self, event: ProcessingEvent) -> Result<(), StateError> {
        match event {
            ProcessingEvent::Complete { submission } => {
                self.dispatch_landing(LandingIntent::ProcessingComplete { submission });
            }
            ProcessingEvent::OpenEditor { submission } => {
                let editor = self.editor()?;
                self.dispatch_landing(LandingIntent::Opened { submission });
                editor.set_view(View::Editor);
                self.sync()?;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Editor screen
    // ========================================================================

    pub fn select(&mut self, id: &str) {
        self.dispatch_editor(EditorIntent::Select { id: id.to_string() });
    }

    pub fn select_next(&mut self) -> Result<(), StateError> {
        let order = self.block_order()?;
        self.dispatch_editor(EditorIntent::MoveDown { order });
        Ok(())
    }

    pub fn select_previous(&mut self) -> Result<(), StateError> {
        let order = self.block_order()?;
        self.dispatch_editor(EditorIntent::MoveUp { order });
        Ok(())
    }

    pub fn focus_text(&mut self) {
        self.dispatch_editor(EditorIntent::FocusText);
    }

    pub fn focus_outline(&mut self) {
        self.dispatch_editor(EditorIntent::FocusOutline);
    }

    pub fn accept_selected(&mut self) -> Result<(), StateError> {
        let Some(id) = self.editor_screen.selected.clone() else {
            return Ok(());
        };
        self.editor()?.accept(&id);
        self.sync()
    }

    pub fn remove_selected(&mut self) -> Result<(), StateError> {
        let Some(id) = self.editor_screen.selected.clone() else {
            return Ok(());
        };
        self.editor()?.remove(&id);
        self.sync()
    }

    pub fn clear_blocks(&mut self) -> Result<(), StateError> {
        self.editor()?.clear();
        self.sync()
    }

    pub fn back_to_landing(&mut self) -> Result<(), StateError> {
        self.editor()?.set_view(View::Landing);
        self.sync()
    }

    /// Update the local draft and write it through to the block store.
    pub fn set_draft(&mut self, id: &str, text: String) -> Result<(), StateError> {
        let editor = self.editor()?;
        self.dispatch_editor(EditorIntent::SetDraft {
            id: id.to_string(),
            text: text.clone(),
        });
        editor.update(id, BlockPatch::text(text));
        self.sync()
    }

    /// Apply `edit` to the selected block's draft. No-op without a selection.
    pub fn edit_selected_draft<F>(&mut self, edit: F) -> Result<(), StateError>
    where
        F: FnOnce(&mut String),
    {
        let Some(id) = self.editor_screen.selected.clone() else {
            return Ok(());
        };
        let mut text = self
            .editor_screen
            .drafts
            .get(&id)
            .unwrap_or_default()
            .to_string();
        edit(&mut text);
        self.set_draft(&id, text)
    }

    fn block_order(&self) -> Result<Vec<String>, StateError> {
        Ok(self
            .editor()?
            .blocks()
            .into_iter()
            .map(|block| block.id)
            .collect())
    }

    fn dispatch_landing(&mut self, intent: LandingIntent) {
        dispatch_mvi!(self, landing, LandingReducer, intent);
    }

    fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor_screen, EditorReducer, intent);
    }
}
