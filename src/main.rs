use anyhow::Result;
use clap::Parser;
use greenflux_agent::cli::{Cli, CliState};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config and validate before anything else
    let state = CliState::initialize(&cli)?;

    // Initialize logging based on config
    let default_directive = format!("greenflux_agent={}", state.config.logging.level);
    let env_override = env::var("RUST_LOG").unwrap_or_default();
    let combined_filter = if env_override.trim().is_empty() {
        default_directive.clone()
    } else if env_override.contains("greenflux_agent") {
        env_override
    } else {
        format!("{},{}", env_override, default_directive)
    };

    tracing_subscriber::fmt()
        .with_env_filter(combined_filter)
        .with_target(true)
        .init();

    state.run(cli.command).await?;
    Ok(())
}
