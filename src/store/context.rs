use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::utils::home_path;
use super::Storable;
use crate::config::{
    API_URL_ENV, CONTEXT_STORE_PATH, DEFAULT_API_URL, DEFAULT_USER_TOKEN, PUBLIC_API_URL_ENV,
    SERVICE_KEY_ENV, USER_TOKEN_ENV,
};
use crate::impl_store;

/// Settings persisted between runs.
///
/// Each value is only a fallback: flags and environment variables win.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Context {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Storable for Context {
    fn path() -> Result<PathBuf> {
        home_path(CONTEXT_STORE_PATH)
    }
}

impl_store!(Context);

impl Context {
    /// Base url of the public (user facing) API.
    pub fn public_api_url(&self) -> String {
        resolve(std::env::var(PUBLIC_API_URL_ENV).ok(), &self.public_api_url)
    }

    /// Base url of the internal API used for role scoped calls.
    pub fn api_url(&self) -> String {
        resolve(std::env::var(API_URL_ENV).ok(), &self.api_url)
    }

    pub fn user_token(override_token: Option<String>) -> String {
        override_token
            .or_else(|| std::env::var(USER_TOKEN_ENV).ok())
            .unwrap_or_else(|| DEFAULT_USER_TOKEN.to_string())
    }

    /// Key the internal API expects from services, if one is configured.
    pub fn service_key() -> Option<String> {
        std::env::var(SERVICE_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
    }
}

fn resolve(from_env: Option<String>, stored: &Option<String>) -> String {
    from_env
        .or_else(|| stored.clone())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
