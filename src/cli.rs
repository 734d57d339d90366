use std::path::PathBuf;

use clap::Parser;

/// Turn messy notes into structured blocks, then refine and accept them.
#[derive(Debug, Parser)]
#[command(name = "narrator", version, about)]
pub struct Cli {
    /// Config file (defaults to <config_dir>/narrator/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pre-fill the notes field on the landing screen.
    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,

    /// Write logs to this file (overrides logging.file).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print accepted blocks as JSON after the session ends.
    #[arg(long)]
    pub print_accepted: bool,
}
