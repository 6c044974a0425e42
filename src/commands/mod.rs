pub mod completions;
pub mod config;
pub mod secrets;
pub mod workflows;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "workflows", alias = "workflow", alias = "wf")]
    Workflows(workflows::Options),
    #[clap(name = "secrets", alias = "secret")]
    Secrets(secrets::Options),
    Config(config::Options),
    Completions(completions::Options),
}

/// Runs the commands that need no [`State`], handing back the others.
pub fn handle_local_command(command: Commands) -> Option<Commands> {
    match command {
        Commands::Completions(options) => {
            completions::handle(options);
            None
        }

        command => Some(command),
    }
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    match command {
        Commands::Workflows(options) => workflows::handle(options, state).await,
        Commands::Secrets(options) => secrets::handle(options, state).await,
        Commands::Config(options) => config::handle(options, state).await,
        Commands::Completions(_) => unreachable!(),
    }
}
