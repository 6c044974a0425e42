use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::types::NewWorkflow;
use super::utils::create_workflow;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Create a workflow")]
pub struct Options {
    #[clap(short = 't', long = "title", help = "Title of the workflow")]
    pub title: Option<String>,

    #[clap(short = 'd', long = "description", help = "Description of the workflow")]
    pub description: Option<String>,

    #[clap(
        short = 'f',
        long = "file",
        help = "Path to a YAML workflow definition, takes precedence over title and description"
    )]
    pub file: Option<PathBuf>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    if options.file.is_some() && (options.title.is_some() || options.description.is_some()) {
        log::warn!("A definition file was given, ignoring title and description");
    }

    let workflow = NewWorkflow {
        title: options.title,
        description: options.description,
        file: options.file,
    };

    match create_workflow(&state.http, &workflow).await? {
        Some(created) => println!("{created}"),
        None => log::info!("Workflow created"),
    }

    Ok(())
}
