use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Online,
    Offline,
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateStatus {
    pub status: WorkflowStatus,
}

/// What to create a workflow from.
///
/// A definition `file` takes precedence, `title` and `description` are
/// ignored when one is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewWorkflow {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file: Option<PathBuf>,
}
