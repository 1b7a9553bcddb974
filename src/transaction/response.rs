//! Signed payloads and execution results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transaction bytes plus the signature over them, both base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub bytes: String,
    pub signature: String,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub digest: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Value>>,
}

impl ExecutionResult {
    pub fn new(digest: impl Into<String>) -> Self {
        Self {
            digest: digest.into(),
            ..Default::default()
        }
    }

    /// Effects status string (`success` / `failure`) when effects were returned.
    pub fn status(&self) -> Option<&str> {
        self.effects
            .as_ref()?
            .get("status")?
            .get("status")?
            .as_str()
    }
}
