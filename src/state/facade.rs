//! Single access point over blocks, acceptance and the active view.
//!
//! All three components live behind one lock and every operation runs under
//! a single write guard, so a reader never observes a block whose `accepted`
//! flag disagrees with the accepted set.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;

use super::accepted::AcceptanceTracker;
use super::block::{Block, BlockPatch};
use super::store::BlockStore;
use super::view::{View, ViewController};

/// Shared handle to one session's analysis/editor state.
///
/// Cloning is cheap and every clone sees the same state. Screens normally
/// reach it through an [`EditorContext`](super::EditorContext) rather than
/// holding a clone.
#[derive(Clone)]
pub struct AnalysisEditor {
    inner: Arc<RwLock<EditorInner>>,
}

#[derive(Debug, Default)]
pub(crate) struct EditorInner {
    store: BlockStore,
    accepted: AcceptanceTracker,
    view: ViewController,
    /// Bumped whenever the block list changes.
    revision: u64,
}

/// Point-in-time copy of the whole state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub blocks: Vec<Block>,
    pub accepted_ids: HashSet<String>,
    pub view: View,
    pub revision: u64,
}

impl Snapshot {
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn is_accepted(&self, id: &str) -> bool {
        self.accepted_ids.contains(id)
    }

    pub fn accepted_blocks(&self) -> Vec<&Block> {
        self.blocks.iter().filter(|block| block.accepted).collect()
    }
}

impl Default for AnalysisEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEditor {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(EditorInner::default())),
        }
    }

    pub(crate) fn from_shared(inner: Arc<RwLock<EditorInner>>) -> Self {
        Self { inner }
    }

    pub(crate) fn shared(&self) -> &Arc<RwLock<EditorInner>> {
        &self.inner
    }

    /// Upsert blocks by id.
    ///
    /// Existing ids are overwritten in place, new ids are appended. The
    /// `accepted` flag of every merged block is taken from the accepted set,
    /// not from the incoming record.
    pub fn merge<I>(&self, blocks: I)
    where
        I: IntoIterator<Item = Block>,
    {
        let mut incoming: Vec<Block> = blocks.into_iter().collect();
        if incoming.is_empty() {
            return;
        }

        let mut inner = self.inner.write();
        for block in &mut incoming {
            block.accepted = inner.accepted.contains(&block.id);
        }
        let count = incoming.len();
        inner.store.merge(incoming);
        inner.revision += 1;
        tracing::debug!(
            merged = count,
            total = inner.store.len(),
            revision = inner.revision,
            "Merged blocks"
        );
    }

    /// Field-level update of one block. Unknown ids are ignored.
    ///
    /// The `accepted` field of the patch is dropped; acceptance only changes
    /// through [`accept`](Self::accept) and [`remove`](Self::remove).
    pub fn update(&self, id: &str, mut patch: BlockPatch) {
        if patch.accepted.take().is_some() {
            tracing::debug!(id, "Ignoring accepted flag in block patch");
        }

        let mut inner = self.inner.write();
        if inner.store.update(id, patch) {
            inner.revision += 1;
        } else {
            tracing::trace!(id, "Update for unknown block ignored");
        }
    }

    /// Mark a block accepted. Idempotent; an unknown id is remembered.
    pub fn accept(&self, id: &str) {
        let mut inner = self.inner.write();
        let newly = inner.accepted.accept(id);
        let present = inner.store.update(
            id,
            BlockPatch {
                accepted: Some(true),
                ..BlockPatch::default()
            },
        );
        if present && newly {
            inner.revision += 1;
        }
        if newly {
            tracing::info!(id, present, "Block accepted");
        }
    }

    /// Remove a block and its acceptance. Unknown ids are ignored.
    pub fn remove(&self, id: &str) {
        let mut inner = self.inner.write();
        let removed = inner.store.remove(id).is_some();
        let was_accepted = inner.accepted.forget(id);
        if removed {
            inner.revision += 1;
            tracing::info!(id, was_accepted, "Block removed");
        }
    }

    /// Drop every block and every acceptance.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        let dropped = inner.store.len();
        inner.store.clear();
        inner.accepted.clear();
        inner.revision += 1;
        tracing::info!(dropped, "Cleared all blocks");
    }

    /// Switch the active screen. Returns the previous view.
    pub fn set_view(&self, view: View) -> View {
        let previous = self.inner.write().view.set(view);
        if previous != view {
            tracing::info!(from = %previous, to = %view, "View changed");
        }
        previous
    }

    pub fn view(&self) -> View {
        self.inner.read().view.current()
    }

    pub fn blocks(&self) -> Vec<Block> {
        self.inner.read().store.list()
    }

    pub fn block(&self, id: &str) -> Option<Block> {
        self.inner.read().store.get(id).cloned()
    }

    pub fn accepted_ids(&self) -> HashSet<String> {
        self.inner.read().accepted.ids().clone()
    }

    pub fn is_accepted(&self, id: &str) -> bool {
        self.inner.read().accepted.contains(id)
    }

    pub fn revision(&self) -> u64 {
        self.inner.read().revision
    }

    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.read();
        Snapshot {
            blocks: inner.store.list(),
            accepted_ids: inner.accepted.ids().clone(),
            view: inner.view.current(),
            revision: inner.revision,
        }
    }
}
