use anyhow::Context;
use clap::Parser;
use narrator::cli::Cli;
use narrator::config::Config;
use narrator::state::Block;
use narrator::ui::runtime;
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    if let Some(file) = cli.log_file.clone() {
        config.logging.file = Some(file);
    }

    narrator::logging::init_tracing(&config.logging).context("failed to initialize logging")?;

    let session_id = Uuid::new_v4();
    let span = tracing::info_span!("session", id = %session_id);
    let _entered = span.enter();
    tracing::info!(config = %config_path.display(), "Starting narrator");

    let snapshot = match runtime::run(&config, cli.notes) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::error!(error = %err, "Session aborted");
            return Err(err).context("narrator session failed");
        }
    };
    tracing::info!(
        blocks = snapshot.blocks.len(),
        accepted = snapshot.accepted_ids.len(),
        "Session ended"
    );

    if cli.print_accepted {
        let accepted: Vec<&Block> = snapshot.accepted_blocks();
        println!("{}", serde_json::to_string_pretty(&accepted)?);
    }

    Ok(())
}
