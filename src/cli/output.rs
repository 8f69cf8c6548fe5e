use super::error::{AthenaViewsError, AthenaViewsErrorKind};
use super::CMD_NAME;
use crate::execution::RunSummary;

use chrono::{DateTime, Utc};
use serde::Serialize;


#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "message", rename_all = "snake_case")]
pub enum AthenaViewsErrorJson {
    Configuration(String),
    Discovery(String),
    ExecutionErrors(String),
    SetGlobalDefault(String),
}

impl AthenaViewsErrorJson {
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration(message)
            | Self::Discovery(message)
            | Self::ExecutionErrors(message)
            | Self::SetGlobalDefault(message) => message,
        }
    }
}

impl From<&AthenaViewsError> for AthenaViewsErrorJson {
    fn from(e: &AthenaViewsError) -> Self {
        let message = e.kind.to_string();

        match &e.kind {
            AthenaViewsErrorKind::Configuration(_) => Self::Configuration(message),
            AthenaViewsErrorKind::Discovery(_) => Self::Discovery(message),
            AthenaViewsErrorKind::ExecutionErrors(_) => Self::ExecutionErrors(message),
            AthenaViewsErrorKind::SetGlobalDefault(_) => Self::SetGlobalDefault(message),
        }
    }
}


#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AthenaViewsStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
pub struct AthenaViewsOutput {
    pub command: &'static str,
    pub status: AthenaViewsStatus,
    pub data: Option<RunSummary>,
    pub error: Option<AthenaViewsErrorJson>,
    pub timestamp: DateTime<Utc>,
}

impl AthenaViewsOutput {
    /// A finished run is an error if any item failed, even though it produced a summary.
    pub fn from_result(result: Result<RunSummary, AthenaViewsError>) -> Self {
        let (data, error) = match result {
            Ok(summary) => {
                let error = summary.ensure_success().err();
                (Some(summary), error)
            }
            Err(error) => (None, Some(error)),
        };

        AthenaViewsOutput {
            command: CMD_NAME,
            status: if error.is_some() { AthenaViewsStatus::Error } else { AthenaViewsStatus::Success },
            data,
            error: error.as_ref().map(AthenaViewsErrorJson::from),
            timestamp: Utc::now(),
        }
    }
}
