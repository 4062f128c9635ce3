// Outcome of processing one change request, returned to whichever transport fronts the engine.

use crate::modules::customer_records::core::change_request::ChangeRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessStatus {
    Success,
    Warning,
    Error,
}

impl ProcessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessStatus::Success => "SUCCESS",
            ProcessStatus::Warning => "WARNING",
            ProcessStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub id: String,
    pub operation: String,
    pub status: ProcessStatus,
    pub processed_at: DateTime<Utc>,
    pub message: String,
}

impl ProcessResult {
    /// Result echoing the request's own id and operation, stamped now.
    pub fn for_request(
        request: &ChangeRequest,
        status: ProcessStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: request.id.clone(),
            operation: request.operation.clone(),
            status,
            processed_at: Utc::now(),
            message: message.into(),
        }
    }
}
