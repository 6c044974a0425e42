use anyhow::Result;
use clap::Parser;

use super::types::WorkflowStatus;
use super::utils::set_workflow_status;
use crate::state::State;

#[derive(Debug, Parser)]
pub struct Options {
    #[clap(name = "workflow", help = "ID of the workflow")]
    pub workflow_id: String,

    #[clap(short = 'w', long = "webhook", help = "Also update the workflow's webhook")]
    pub webhook: bool,
}

pub async fn handle(options: Options, state: State, status: WorkflowStatus) -> Result<()> {
    set_workflow_status(&state.http, &options.workflow_id, status, options.webhook).await?;

    if options.webhook {
        log::info!(
            "Workflow `{}` and its webhook are {status}",
            options.workflow_id
        );
    } else {
        log::info!("Workflow `{}` is {status}", options.workflow_id);
    }

    Ok(())
}
