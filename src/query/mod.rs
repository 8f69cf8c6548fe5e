mod error;

pub use error::{DiscoveryError, DiscoveryErrorKind};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};


/// Suffix a file must carry to be submitted. Matched case-sensitively.
pub const SQL_EXTENSION: &str = ".sql";


/// A query whose text has been read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem {
    pub name: String,
    pub text: String,
}

/// A discovered query file. The text is only read when the runner reaches it,
/// so an unreadable file fails on its own without aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFile {
    pub path: PathBuf,
    pub name: String,
}

impl QueryFile {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        QueryFile { path: path.into(), name: name.into() }
    }

    pub fn load(&self) -> io::Result<QueryItem> {
        let text = fs::read_to_string(&self.path)?;
        Ok(QueryItem { name: self.name.clone(), text })
    }
}


/// Recursively collect every non-directory entry under `root` whose name ends with `extension`.
///
/// Entries are visited in file-name order, depth first, so two scans of the
/// same tree return the same sequence. The name of each result is its path
/// relative to `root`, joined with `/`.
pub fn discover(root: &Path, extension: &str) -> Result<Vec<QueryFile>, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError { kind: DiscoveryErrorKind::InvalidDirectory(root.to_path_buf()) })
    }

    let mut files = Vec::new();
    visit(root, root, extension, &mut files)?;
    Ok(files)
}

fn visit(
    root: &Path,
    directory: &Path,
    extension: &str,
    files: &mut Vec<QueryFile>,
) -> Result<(), DiscoveryError> {
    let io_error = |source| DiscoveryError {
        kind: DiscoveryErrorKind::Io { path: directory.to_path_buf(), source }
    };

    let mut entries = fs::read_dir(directory)
        .map_err(io_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(io_error)?;

        if file_type.is_dir() {
            visit(root, &path, extension, files)?;
            continue;
        }

        // Anything that is not a directory counts, including broken links:
        // an unreadable entry surfaces later as a read error for that item.
        if !entry.file_name().as_encoded_bytes().ends_with(extension.as_bytes()) {
            tracing::trace!("Skipping {:?}", path);
            continue;
        }

        let name = relative_name(root, &path);
        files.push(QueryFile { path, name });
    }

    Ok(())
}

fn relative_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
