use super::ExecutionHandle;

use std::error::Error;
use std::fmt;


#[derive(Debug)]
#[non_exhaustive]
pub struct EngineError {
    pub kind: EngineErrorKind
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EngineError: {}", self.kind)
    }
}

impl Error for EngineError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(&self.kind)
	}
}

#[derive(Debug)]
pub enum EngineErrorKind {
    MissingExecutionId,
    MissingStatus(ExecutionHandle),
    Status(String),
    Submit(String),
}

impl fmt::Display for EngineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingExecutionId => write!(f, "Service accepted the query but returned no execution ID"),
            Self::MissingStatus(handle) => write!(f, "Service returned no status for execution '{handle}'"),
            Self::Status(message) => write!(f, "Failed to get execution status: {message}"),
            Self::Submit(message) => write!(f, "Failed to start query execution: {message}"),
        }
    }
}

impl Error for EngineErrorKind {}

impl EngineError {
    pub fn submit(message: impl Into<String>) -> Self {
        EngineError { kind: EngineErrorKind::Submit(message.into()) }
    }

    pub fn status(message: impl Into<String>) -> Self {
        EngineError { kind: EngineErrorKind::Status(message.into()) }
    }

    /// The service-supplied message, without the local prefix.
    pub fn detail(&self) -> String {
        match &self.kind {
            EngineErrorKind::Status(message) | EngineErrorKind::Submit(message) => message.clone(),
            kind => kind.to_string(),
        }
    }
}
