//! Active screen indicator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which screen is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Editor,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Editor => "editor",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-state view holder.
///
/// `set` is an unguarded setter: either view may be requested from either
/// view, including the one already active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewController {
    current: View,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Returns the previous view.
    pub fn set(&mut self, view: View) -> View {
        std::mem::replace(&mut self.current, view)
    }
}
