mod athena;
mod error;
#[cfg(test)]
pub mod mock;

pub use athena::AthenaEngine;
pub use error::{EngineError, EngineErrorKind};

use async_trait::async_trait;
use std::fmt;


/// Data catalog every query is submitted against.
pub const DEFAULT_CATALOG: &str = "AwsDataCatalog";


/// Where a query runs. Resolved once before any submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionParameters {
    pub catalog: String,
    pub database: String,
    pub workgroup: String,
    pub region: String,
}


/// Identifier the service hands back for one submitted query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExecutionHandle(String);

impl ExecutionHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExecutionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ExecutionHandle {
    fn from(id: String) -> Self {
        ExecutionHandle(id)
    }
}

impl From<&str> for ExecutionHandle {
    fn from(id: &str) -> Self {
        ExecutionHandle(id.to_string())
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionState {
    Queued,
    Running,
    Succeeded,
    Failed,
    Cancelled,
    Unknown(String),
}

impl ExecutionState {
    pub fn parse(state: &str) -> Self {
        match state {
            "QUEUED" => Self::Queued,
            "RUNNING" => Self::Running,
            "SUCCEEDED" => Self::Succeeded,
            "FAILED" => Self::Failed,
            "CANCELLED" => Self::Cancelled,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Queued => "QUEUED",
            Self::Running => "RUNNING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown(state) => state,
        };
        write!(f, "{name}")
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionStatus {
    pub state: ExecutionState,
    pub reason: Option<String>,
}

impl ExecutionStatus {
    pub fn new(state: ExecutionState) -> Self {
        ExecutionStatus { state, reason: None }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}


/// The two calls the runner needs from the remote query service.
#[async_trait]
pub trait ExecutionClient: Send + Sync {
    async fn submit(
        &self,
        text: &str,
        parameters: &ExecutionParameters,
    ) -> Result<ExecutionHandle, EngineError>;

    async fn get_status(&self, handle: &ExecutionHandle) -> Result<ExecutionStatus, EngineError>;
}
