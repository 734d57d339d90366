//! Design Narrator: turn free-form notes into structured blocks, then
//! browse, edit, and accept them in a terminal editor.
//!
//! The shared session state lives in [`state`]; everything under [`ui`] is
//! presentation that reaches it through an [`state::EditorContext`].

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod scheduler;
pub mod shutdown;
pub mod state;
pub mod ui;
