use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::providers::ProviderConfig;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: ProviderCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProviderCommand {
    Newrelic {
        #[command(subcommand)]
        command: DashboardCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum DashboardCommand {
    /// Check a dashboard configuration against the resource schema
    Validate(ConfigArgs),
    /// Print the request a configuration would send
    Plan(ConfigArgs),
    /// Create the dashboard and record it in state
    Create(ApplyArgs),
    /// Refresh a recorded dashboard from the API
    Read(ResourceArgs),
    /// Push configuration changes to a recorded dashboard
    Update(ApplyArgs),
    /// Delete a recorded dashboard
    Delete(ResourceArgs),
    /// Adopt an existing dashboard by id
    Import(ImportArgs),
    /// List recorded resources
    Show(StateArgs),
}

#[derive(clap::Args, Debug)]
pub struct ProviderArgs {
    #[arg(long, env = "NEW_RELIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "NEW_RELIC_API_URL")]
    pub api_url: Option<String>,
}

impl From<ProviderArgs> for ProviderConfig {
    fn from(args: ProviderArgs) -> Self {
        ProviderConfig {
            api_key: args.api_key,
            api_url: args.api_url,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct StateArgs {
    #[arg(long, env = "NRDASH_STATE_FILE")]
    pub state: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    #[arg(long, short)]
    pub config: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub provider: ProviderArgs,

    #[command(flatten)]
    pub state: StateArgs,

    #[arg(long)]
    pub name: String,

    #[arg(long, short)]
    pub config: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ResourceArgs {
    #[command(flatten)]
    pub provider: ProviderArgs,

    #[command(flatten)]
    pub state: StateArgs,

    #[arg(long)]
    pub name: String,
}

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    #[command(flatten)]
    pub provider: ProviderArgs,

    #[command(flatten)]
    pub state: StateArgs,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub id: String,
}
