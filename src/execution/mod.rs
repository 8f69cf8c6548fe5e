mod poll;
mod runner;

pub use poll::{poll_until_terminal, PollSettings};
pub use runner::{BatchRunner, ItemReport, RunSummary};

use serde::Serialize;
use std::fmt;


/// Final result of one query item. Anything but `Succeeded` counts as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum ExecutionOutcome {
    Succeeded,
    Failed(String),
    TimedOut,
    SubmitError(String),
    ReadError(String),
    StatusError(String),
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl fmt::Display for ExecutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "SUCCEEDED"),
            Self::Failed(reason) => write!(f, "FAILED: {reason}"),
            Self::TimedOut => write!(f, "TIMED OUT waiting for query result"),
            Self::SubmitError(reason) => write!(f, "got error during execution: {reason}"),
            Self::ReadError(reason) => write!(f, "got error reading file: {reason}"),
            Self::StatusError(reason) => write!(f, "got error getting execution: {reason}"),
        }
    }
}
