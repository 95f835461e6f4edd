//! Command-line surface for the configuration submitter
//!
//! Running the binary with no subcommand performs the one creation
//! call: build the advisor definition, send it, print the response.

pub mod formatting;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::agent::advisor;
use crate::client::OmnidimClient;
use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "greenflux-agent")]
#[command(version, about = "Provision GreenFlux's voice advisor on the OmniDimension platform")]
pub struct Cli {
    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print raw JSON output, no headers
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the advisor agent on the platform (the default action)
    Create {
        /// Print the request payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// List agents registered on the platform
    List {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Agents per page
        #[arg(long, default_value_t = 30)]
        page_size: u32,
    },
    /// Fetch one agent's stored configuration
    Get {
        /// Agent identifier
        id: u64,
    },
    /// Delete an agent from the platform
    Delete {
        /// Agent identifier
        id: u64,
    },
}

pub struct CliState {
    pub config: AppConfig,
    pub json_output: bool,
}

impl CliState {
    /// Initialize from the parsed arguments: load config, apply
    /// environment overrides, validate.
    pub fn initialize(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => AppConfig::load_from_file(path)?,
            None => AppConfig::load()?,
        };
        config.apply_env_overrides();
        config.validate()?;

        Ok(Self {
            config,
            json_output: cli.json,
        })
    }

    /// Dispatch a command. A missing subcommand is the submitter's
    /// default action: create the advisor.
    pub async fn run(&self, command: Option<Commands>) -> Result<()> {
        match command.unwrap_or(Commands::Create { dry_run: false }) {
            Commands::Create { dry_run } => self.create(dry_run).await,
            Commands::List { page, page_size } => self.list(page, page_size).await,
            Commands::Get { id } => self.get(id).await,
            Commands::Delete { id } => self.delete(id).await,
        }
    }

    fn client(&self) -> Result<OmnidimClient> {
        let api_key = self.config.api.resolve_api_key()?;
        Ok(OmnidimClient::new(api_key).with_base_url(self.config.api.base_url.clone()))
    }

    async fn create(&self, dry_run: bool) -> Result<()> {
        let definition = advisor::definition();

        if dry_run {
            let payload = serde_json::to_value(&definition)?;
            println!(
                "{}",
                formatting::render_response("Request payload (dry run)", &payload, self.json_output)
            );
            return Ok(());
        }

        let created = self.client()?.create_agent(&definition).await?;
        tracing::info!(agent_id = created.id, name = %definition.name, "agent created");

        let value = serde_json::to_value(&created)?;
        println!(
            "{}",
            formatting::render_response("Agent created", &value, self.json_output)
        );
        Ok(())
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<()> {
        let agents = self.client()?.list_agents(page, page_size).await?;
        tracing::info!(count = agents.agents.len(), page, "agents listed");

        let value = serde_json::to_value(&agents)?;
        println!(
            "{}",
            formatting::render_response("Agents", &value, self.json_output)
        );
        Ok(())
    }

    async fn get(&self, id: u64) -> Result<()> {
        let agent = self.client()?.get_agent(id).await?;
        tracing::info!(agent_id = id, "agent fetched");

        println!(
            "{}",
            formatting::render_response("Agent", &agent, self.json_output)
        );
        Ok(())
    }

    async fn delete(&self, id: u64) -> Result<()> {
        self.client()?.delete_agent(id).await?;
        tracing::info!(agent_id = id, "agent deleted");

        println!(
            "{}",
            formatting::render_response(
                "Agent deleted",
                &serde_json::json!({ "id": id }),
                self.json_output
            )
        );
        Ok(())
    }
}
