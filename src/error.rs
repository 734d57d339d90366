use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::state::StateError;

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
