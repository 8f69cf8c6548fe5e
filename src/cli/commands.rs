use super::config::RunConfig;
use super::error::AthenaViewsError;
use crate::db::{self, ExecutionClient, ExecutionParameters};
use crate::execution::{BatchRunner, RunSummary};
use crate::query::{self, QueryFile, SQL_EXTENSION};

use std::path::Path;


/// Scans the configured root, then runs every query found against Athena.
pub async fn run(config: &RunConfig) -> Result<RunSummary, AthenaViewsError> {
    let files = scan(&config.root)?;

    let engine = db::AthenaEngine::new(&config.parameters.region).await;

    Ok(execute(&engine, &config.parameters, &files).await)
}

/// Collects the query files under `root`. Fails the whole run if the tree can't be read.
pub fn scan(root: &Path) -> Result<Vec<QueryFile>, AthenaViewsError> {
    tracing::info!("Scanning path: {}", root.display());
    let files = query::discover(root, SQL_EXTENSION)?;
    tracing::info!("Found {} SQL files", files.len());

    Ok(files)
}

pub async fn execute<C>(
    client: &C,
    parameters: &ExecutionParameters,
    files: &[QueryFile],
) -> RunSummary
where
    C: ExecutionClient + ?Sized,
{
    BatchRunner::new(client, parameters).run(files).await
}
