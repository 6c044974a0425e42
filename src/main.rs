#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use tracecat_cli::commands::{handle_command, handle_local_command};
use tracecat_cli::state::{State, StateOptions};
use tracecat_cli::{utils, CLI};

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    // completions must work without a home directory or a readable context
    let Some(commands) = handle_local_command(cli.commands) else {
        return Ok(());
    };

    let state = match State::new(StateOptions {
        override_token: cli.token,
        override_user_id: cli.user_id,
    })
    .await
    {
        Ok(state) => state,
        Err(error) => {
            log::error!("{error:#}");
            std::process::exit(1);
        }
    };

    if let Err(error) = handle_command(commands, state).await {
        log::error!("{error:#}");
        std::process::exit(1);
    }

    Ok(())
}
