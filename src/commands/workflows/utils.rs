use std::path::Path;

use anyhow::{anyhow, Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::Value;
use tokio::fs;

use super::types::{NewWorkflow, UpdateStatus, WorkflowStatus};
use crate::state::http::types::{ApiError, ResponseBody};
use crate::state::http::HttpClient;

pub async fn create_workflow(
    http: &HttpClient,
    workflow: &NewWorkflow,
) -> Result<Option<ResponseBody>> {
    let request = match workflow.file {
        Some(ref file) => http
            .request(Method::POST, "/workflows")
            .multipart(definition_form(file).await?),

        None => {
            let params = [("title", &workflow.title), ("description", &workflow.description)]
                .into_iter()
                .filter_map(|(key, value)| match value.as_deref() {
                    Some(value) if !value.is_empty() => Some((key, value)),
                    _ => None,
                })
                .collect::<Vec<_>>();

            http.request(Method::POST, "/workflows").form(&params)
        }
    };

    http.send(request).await
}

async fn definition_form(file: &Path) -> Result<Form> {
    let content = fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read `{}`", file.display()))?;

    serde_yaml::from_str::<serde_yaml::Value>(&content)
        .with_context(|| format!("`{}` is not a valid YAML document", file.display()))?;

    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("Invalid file name `{}`", file.display()))?
        .to_string();

    log::debug!("Uploading definition `{file_name}`");

    Ok(Form::new().part(
        "file",
        Part::text(content)
            .file_name(file_name)
            .mime_str("application/yaml")?,
    ))
}

/// Updates the workflow status, then the webhook status if asked to.
///
/// The two updates are not atomic: if the webhook update fails the
/// workflow keeps its new status.
pub async fn set_workflow_status(
    http: &HttpClient,
    workflow_id: &str,
    status: WorkflowStatus,
    with_webhook: bool,
) -> Result<()> {
    let body = UpdateStatus { status };

    http.request(Method::PATCH, &format!("/workflows/{workflow_id}"))
        .json(&body)
        .send()
        .await?
        .error_for_status()
        .map_err(ApiError::from)?;

    if with_webhook {
        http.request(Method::PATCH, &format!("/workflows/{workflow_id}/webhook"))
            .json(&body)
            .send()
            .await?
            .error_for_status()
            .map_err(ApiError::from)?;
    }

    Ok(())
}

pub async fn activate_workflow(
    http: &HttpClient,
    workflow_id: &str,
    with_webhook: bool,
) -> Result<()> {
    set_workflow_status(http, workflow_id, WorkflowStatus::Online, with_webhook).await
}

/// Creates a workflow definition from the current state of a workflow.
pub async fn commit_workflow(http: &HttpClient, workflow_id: &str) -> Result<Value> {
    let response = http
        .request(Method::POST, &format!("/workflows/{workflow_id}/commit"))
        .send()
        .await?
        .error_for_status()
        .map_err(ApiError::from)?;

    response
        .json::<Value>()
        .await
        .context("Failed to decode the committed definition")
}
