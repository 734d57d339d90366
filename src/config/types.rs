use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::extract::DEFAULT_SNIPPET_LIMIT;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub processing: ProcessingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Timing of the simulated note processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Delay between submitting notes and "processing complete" (default: 600).
    #[serde(default = "default_complete_delay_ms")]
    pub complete_delay_ms: u64,
    /// Delay between "processing complete" and opening the editor (default: 200).
    #[serde(default = "default_open_delay_ms")]
    pub open_delay_ms: u64,
    /// Characters of the notes kept by the sample extractor (default: 220).
    #[serde(default = "default_snippet_limit")]
    pub snippet_limit: usize,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output. Without a file nothing is logged, the terminal is busy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_complete_delay_ms() -> u64 {
    600
}

fn default_open_delay_ms() -> u64 {
    200
}

fn default_snippet_limit() -> usize {
    DEFAULT_SNIPPET_LIMIT
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            complete_delay_ms: default_complete_delay_ms(),
            open_delay_ms: default_open_delay_ms(),
            snippet_limit: default_snippet_limit(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl ProcessingConfig {
    pub fn complete_delay(&self) -> Duration {
        Duration::from_millis(self.complete_delay_ms)
    }

    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.open_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
