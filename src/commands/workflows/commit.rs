use anyhow::Result;
use clap::Parser;

use super::utils::commit_workflow;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Commit a workflow into a new definition")]
pub struct Options {
    #[clap(name = "workflow", help = "ID of the workflow")]
    pub workflow_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let definition = commit_workflow(&state.http, &options.workflow_id).await?;

    log::debug!("Committed workflow `{}`", options.workflow_id);

    println!("{}", serde_json::to_string_pretty(&definition)?);

    Ok(())
}
