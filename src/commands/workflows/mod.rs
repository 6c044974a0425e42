mod commit;
mod create;
mod status;
pub mod types;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use self::types::WorkflowStatus;
use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "new", alias = "create")]
    Create(create::Options),
    #[clap(name = "activate", alias = "on", about = "Bring a workflow online")]
    Activate(status::Options),
    #[clap(name = "deactivate", alias = "off", about = "Take a workflow offline")]
    Deactivate(status::Options),
    #[clap(name = "commit")]
    Commit(commit::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Manage workflows")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::Create(options) => create::handle(options, state).await,
        Commands::Activate(options) => status::handle(options, state, WorkflowStatus::Online).await,
        Commands::Deactivate(options) => {
            status::handle(options, state, WorkflowStatus::Offline).await
        }
        Commands::Commit(options) => commit::handle(options, state).await,
    }
}
