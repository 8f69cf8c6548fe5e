use std::error::Error;
use std::fmt;
use std::path::PathBuf;


#[derive(Debug)]
#[non_exhaustive]
pub struct DiscoveryError {
    pub kind: DiscoveryErrorKind
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiscoveryError: {}", self.kind)
    }
}

impl Error for DiscoveryError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(&self.kind)
	}
}

#[derive(Debug)]
pub enum DiscoveryErrorKind {
    InvalidDirectory(PathBuf),
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for DiscoveryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirectory(path) => write!(f, "Directory does not exist or is not a directory: '{path:?}'"),
            Self::Io { path, .. } => write!(f, "Failed to traverse directory: '{path:?}'"),
        }
    }
}

impl Error for DiscoveryErrorKind {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Io { source, .. } => Some(source),
			_ => None,
		}
	}
}
