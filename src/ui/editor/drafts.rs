use std::collections::HashMap;

use crate::state::Block;

/// Block id → in-progress text.
///
/// A cache of the store's `extracted_text`, rebuilt from scratch whenever
/// the block list changes. An edit that was not yet written back is lost on
/// rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftBuffer {
    drafts: HashMap<String, String>,
}

impl DraftBuffer {
    pub fn from_blocks(blocks: &[Block]) -> Self {
        Self {
            drafts: blocks
                .iter()
                .map(|block| (block.id.clone(), block.extracted_text.clone()))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.drafts.get(id).map(String::as_str)
    }

    pub fn set(&mut self, id: &str, text: String) {
        self.drafts.insert(id.to_string(), text);
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
