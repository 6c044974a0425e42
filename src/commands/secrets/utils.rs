use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Context, Result};
use futures_util::future::try_join_all;
use reqwest::Method;
use secrecy::ExposeSecret;
use tabwriter::TabWriter;

use super::types::Secret;
use crate::state::http::types::ApiError;
use crate::state::http::HttpClient;
use crate::state::role::Role;

/// Fetches every secret in `secret_names` as `role`, keeping their order.
///
/// The API has no batch endpoint, so this sends one request per name, all
/// at once. A single failure fails the whole call.
pub async fn batch_get_secrets(
    role: &Role,
    api_url: &str,
    service_key: Option<&str>,
    secret_names: &[String],
) -> Result<Vec<Secret>> {
    if secret_names.is_empty() {
        return Ok(vec![]);
    }

    let http = HttpClient::with_role(role, api_url.to_string(), service_key)?;

    log::debug!("Fetching {} secrets", secret_names.len());

    try_join_all(secret_names.iter().map(|name| get_secret(&http, name))).await
}

async fn get_secret(http: &HttpClient, name: &str) -> Result<Secret> {
    let response = http
        .request(Method::GET, &format!("/secrets/{name}"))
        .send()
        .await?
        .error_for_status()
        .map_err(ApiError::from)
        .with_context(|| format!("Failed to fetch secret `{name}`"))?;

    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes).with_context(|| format!("Failed to parse secret `{name}`"))
}

/// Maps each secret name to its keys and exposed values.
///
/// Later secrets overwrite earlier ones with the same name.
pub fn format_secrets_as_json(secrets: &[Secret]) -> BTreeMap<String, BTreeMap<String, String>> {
    let mut secret_dict = BTreeMap::new();

    for secret in secrets {
        secret_dict.insert(
            secret.name.clone(),
            secret
                .encrypted_keys
                .iter()
                .map(|kv| (kv.key.clone(), kv.value.expose_secret().clone()))
                .collect(),
        );
    }

    secret_dict
}

pub fn format_secrets(secrets: &[Secret], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "NAME\tTYPE\tKEYS").unwrap();
    }

    for secret in secrets {
        let keys = secret
            .encrypted_keys
            .iter()
            .map(|kv| kv.key.as_str())
            .collect::<Vec<_>>();

        writeln!(
            &mut tw,
            "{}\t{}\t{}",
            secret.name,
            secret.type_,
            keys.join(", ")
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}
