use anyhow::Result;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    User,
    Service,
}

/// Authorization context the internal API scopes secret access to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "type")]
    pub type_: RoleType,
    pub service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Role {
    pub fn service(service_id: &str) -> Self {
        Self {
            type_: RoleType::Service,
            service_id: service_id.to_string(),
            user_id: None,
        }
    }

    /// A service acting on behalf of a user.
    pub fn user(user_id: &str, service_id: &str) -> Self {
        Self {
            type_: RoleType::User,
            service_id: service_id.to_string(),
            user_id: Some(user_id.to_string()),
        }
    }

    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert("service-role", self.service_id.parse()?);

        if let Some(ref user_id) = self.user_id {
            headers.insert("service-user-id", user_id.parse()?);
        }

        Ok(headers)
    }
}
