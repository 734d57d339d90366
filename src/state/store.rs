//! Identity-keyed, insertion-ordered block collection.

use indexmap::IndexMap;

use super::block::{Block, BlockPatch};

/// Ordered blocks keyed by id.
///
/// Order is first-seen order: merging an existing id replaces the block in
/// its current slot, new ids go to the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockStore {
    blocks: IndexMap<String, Block>,
}

impl BlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert every block in `incoming`, overwriting whole blocks on id match.
    pub fn merge<I>(&mut self, incoming: I)
    where
        I: IntoIterator<Item = Block>,
    {
        for block in incoming {
            // IndexMap::insert keeps the slot of an existing key.
            self.blocks.insert(block.id.clone(), block);
        }
    }

    /// Returns `false` when no block has `id`.
    pub fn update(&mut self, id: &str, patch: BlockPatch) -> bool {
        match self.blocks.get_mut(id) {
            Some(block) => {
                block.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Block> {
        self.blocks.shift_remove(id)
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.blocks.contains_key(id)
    }

    pub fn list(&self) -> Vec<Block> {
        self.blocks.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
