use super::Cli;
use super::error::{AthenaViewsError, AthenaViewsErrorKind};
use crate::db::{ExecutionParameters, DEFAULT_CATALOG};

use std::path::PathBuf;


pub const PATH_PARAM: &str = "path";
pub const DATABASE_PARAM: &str = "database";

pub const DEFAULT_WORKGROUP: &str = "default";
pub const DEFAULT_REGION: &str = "us-east-1";


/// Everything a run needs, resolved once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub root: PathBuf,
    pub parameters: ExecutionParameters,
}

impl RunConfig {
    pub fn from_cli(args: &Cli) -> Result<Self, AthenaViewsError> {
        Self::resolve(
            args.path.clone(),
            args.database.clone(),
            args.workgroup.clone(),
            args.region.clone(),
        )
    }

    /// Apply defaults and check required values. Empty strings count as unset.
    pub fn resolve(
        path: Option<String>,
        database: Option<String>,
        workgroup: Option<String>,
        region: Option<String>,
    ) -> Result<Self, AthenaViewsError> {
        let path = path.filter(|v| !v.is_empty());
        let database = database.filter(|v| !v.is_empty());

        let (root, database) = match (path, database) {
            (Some(path), Some(database)) => (PathBuf::from(path), database),
            (path, database) => {
                let missing = [(PATH_PARAM, path.is_none()), (DATABASE_PARAM, database.is_none())]
                    .into_iter()
                    .filter_map(|(name, absent)| absent.then_some(name))
                    .collect();
                return Err(AthenaViewsError { kind: AthenaViewsErrorKind::Configuration(missing) })
            }
        };

        let workgroup = workgroup.filter(|v| !v.is_empty()).unwrap_or_else(|| {
            tracing::info!("Using default workgroup: {DEFAULT_WORKGROUP}");
            DEFAULT_WORKGROUP.to_string()
        });
        let region = region.filter(|v| !v.is_empty()).unwrap_or_else(|| {
            tracing::info!("Using default region: {DEFAULT_REGION}");
            DEFAULT_REGION.to_string()
        });

        Ok(RunConfig {
            root,
            parameters: ExecutionParameters {
                catalog: DEFAULT_CATALOG.to_string(),
                database,
                workgroup,
                region,
            },
        })
    }
}
