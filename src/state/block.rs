//! Block model shared by both screens.

use serde::{Deserialize, Serialize};

/// One extracted unit of content.
///
/// `id` is the identity key: the store never holds two blocks with the same
/// id, regardless of the other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    /// Category label (e.g. "Problem", "Research").
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub extracted_text: String,
    /// Mirrors membership in the accepted set. Owned by the facade.
    #[serde(default)]
    pub accepted: bool,
}

impl Block {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        title: impl Into<String>,
        extracted_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            title: title.into(),
            extracted_text: extracted_text.into(),
            accepted: false,
        }
    }

    /// Apply the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: BlockPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(text) = patch.extracted_text {
            self.extracted_text = text;
        }
        if let Some(accepted) = patch.accepted {
            self.accepted = accepted;
        }
    }
}

/// Field-level update for a block. `None` means "leave as is".
///
/// The id is not patchable; it is the key the patch is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockPatch {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub extracted_text: Option<String>,
    pub accepted: Option<bool>,
}

impl BlockPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            extracted_text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_only_touches_present_fields() {
        let mut block = Block::new("b1", "Problem", "Problem summary", "old");
        block.apply(BlockPatch::text("new"));
        assert_eq!(block.extracted_text, "new");
        assert_eq!(block.title, "Problem summary");
        assert_eq!(block.kind, "Problem");
        assert!(!block.accepted);
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let block = Block::new("b1", "Problem", "t", "body");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "Problem");
        assert_eq!(json["extractedText"], "body");
        assert_eq!(json["accepted"], false);
    }
}
