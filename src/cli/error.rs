use crate::query::DiscoveryError;

use std::error::Error;
use std::fmt;
use tracing::subscriber::SetGlobalDefaultError;


#[derive(Debug)]
pub struct AthenaViewsError {
    pub kind: AthenaViewsErrorKind
}

impl fmt::Display for AthenaViewsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AthenaViewsError: {}", self.kind)
    }
}

impl Error for AthenaViewsError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
	}
}

#[derive(Debug)]
pub enum AthenaViewsErrorKind {
    Configuration(Vec<&'static str>),
    Discovery(DiscoveryError),
    ExecutionErrors(usize),
    SetGlobalDefault(SetGlobalDefaultError),
}

impl fmt::Display for AthenaViewsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(missing) => write!(
                f,
                "Must supply all parameters: [{}, {}] - missing: [{}]",
                super::config::PATH_PARAM,
                super::config::DATABASE_PARAM,
                missing.join(", ")
            ),
            Self::Discovery(error) => write!(f, "{}", error.kind),
            Self::ExecutionErrors(count) => write!(f, "{count} errors occurred during execution"),
            Self::SetGlobalDefault(error) => write!(f, "Failed to set global default subscriber: {}", error),
        }
    }
}

impl Error for AthenaViewsErrorKind {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Discovery(source) => Some(source),
			Self::SetGlobalDefault(source) => Some(source),
			_ => None
		}
	}
}

impl From<DiscoveryError> for AthenaViewsError {
    fn from(error: DiscoveryError) -> Self {
        AthenaViewsError { kind: AthenaViewsErrorKind::Discovery(error) }
    }
}

impl From<SetGlobalDefaultError> for AthenaViewsError {
    fn from(error: SetGlobalDefaultError) -> Self {
        AthenaViewsError { kind: AthenaViewsErrorKind::SetGlobalDefault(error) }
    }
}
