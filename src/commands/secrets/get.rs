use anyhow::{ensure, Result};
use clap::Parser;

use super::utils::{batch_get_secrets, format_secrets, format_secrets_as_json};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Fetch secrets by name")]
pub struct Options {
    #[clap(name = "names", help = "Names of the secrets")]
    pub names: Vec<String>,

    #[clap(
        short = 'r',
        long = "reveal",
        help = "Print the secret values as JSON instead of a table"
    )]
    pub reveal: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    ensure!(!options.names.is_empty(), "No secret names given");

    let secrets = batch_get_secrets(
        &state.role,
        &state.ctx.api_url(),
        state.service_key.as_deref(),
        &options.names,
    )
    .await?;

    if options.reveal {
        println!(
            "{}",
            serde_json::to_string_pretty(&format_secrets_as_json(&secrets))?
        );
    } else {
        println!("{}", format_secrets(&secrets, true).join("\n"));
    }

    Ok(())
}
