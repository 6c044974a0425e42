use std::collections::HashMap;
use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretType {
    #[default]
    Custom,
    Token,
    Oauth2,
}

impl fmt::Display for SecretType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom => write!(f, "custom"),
            Self::Token => write!(f, "token"),
            Self::Oauth2 => write!(f, "oauth2"),
        }
    }
}

/// A single credential. The value stays redacted until exposed.
#[derive(Debug, Deserialize)]
pub struct SecretKeyValue {
    pub key: String,
    pub value: SecretString,
}

#[derive(Debug, Deserialize)]
pub struct Secret {
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub type_: SecretType,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub encrypted_keys: Vec<SecretKeyValue>,
    pub tags: Option<HashMap<String, String>>,
    pub owner_id: Option<String>,
}
