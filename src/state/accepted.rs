//! Accepted block ids.

use std::collections::HashSet;

/// Membership-only set of accepted block ids.
///
/// Entries may dangle (an id with no block). They become visible only if a
/// block with that id is merged later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptanceTracker {
    ids: HashSet<String>,
}

impl AcceptanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the id was not accepted before.
    pub fn accept(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_string())
    }

    /// Only reachable through block removal; there is no public unaccept.
    pub(crate) fn forget(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_is_idempotent() {
        let mut tracker = AcceptanceTracker::new();
        assert!(tracker.accept("b1"));
        assert!(!tracker.accept("b1"));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn forget_removes_membership() {
        let mut tracker = AcceptanceTracker::new();
        tracker.accept("b1");
        assert!(tracker.forget("b1"));
        assert!(!tracker.contains("b1"));
        assert!(!tracker.forget("b1"));
    }
}
