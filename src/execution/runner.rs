use super::{poll_until_terminal, ExecutionOutcome, PollSettings};
use crate::cli::error::{AthenaViewsError, AthenaViewsErrorKind};
use crate::db::{ExecutionClient, ExecutionParameters};
use crate::query::QueryFile;

use serde::Serialize;
use std::fmt;


#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    pub name: String,
    pub outcome: ExecutionOutcome,
}

impl fmt::Display for ItemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.outcome)
    }
}


/// Per-item outcomes of one run, in processing order.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    items: Vec<ItemReport>,
    errors: usize,
}

impl RunSummary {
    fn record(&mut self, report: ItemReport) {
        if !report.outcome.is_success() {
            self.errors += 1;
        }
        self.items.push(report);
    }

    pub fn items(&self) -> &[ItemReport] {
        &self.items
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn succeeded(&self) -> usize {
        self.items.len() - self.errors
    }

    /// Fails with the number of unsuccessful items, if there are any.
    /// Individual causes are only in the item reports.
    pub fn ensure_success(&self) -> Result<(), AthenaViewsError> {
        if self.errors > 0 {
            return Err(AthenaViewsError { kind: AthenaViewsErrorKind::ExecutionErrors(self.errors) })
        }
        Ok(())
    }
}


/// Runs query files one at a time: submit, then poll to a terminal state.
/// A failing item is recorded and the run moves on.
pub struct BatchRunner<'a, C: ?Sized> {
    client: &'a C,
    parameters: &'a ExecutionParameters,
    settings: PollSettings,
}

impl<'a, C> BatchRunner<'a, C>
where
    C: ExecutionClient + ?Sized,
{
    pub fn new(client: &'a C, parameters: &'a ExecutionParameters) -> Self {
        BatchRunner { client, parameters, settings: PollSettings::default() }
    }

    pub fn with_settings(mut self, settings: PollSettings) -> Self {
        self.settings = settings;
        self
    }

    pub async fn run(&self, files: &[QueryFile]) -> RunSummary {
        let mut summary = RunSummary::default();

        for file in files {
            tracing::info!("--- processing: {} in workgroup: {}", file.name, self.parameters.workgroup);
            let report = ItemReport {
                name: file.name.clone(),
                outcome: self.run_item(file).await,
            };
            log_report(&report);
            summary.record(report);
        }

        summary
    }

    async fn run_item(&self, file: &QueryFile) -> ExecutionOutcome {
        let item = match file.load() {
            Ok(item) => item,
            Err(e) => return ExecutionOutcome::ReadError(e.to_string()),
        };
        tracing::debug!("  > loaded {} ({} bytes)", item.name, item.text.len());

        if self.parameters.database.is_empty() {
            return ExecutionOutcome::SubmitError("no database to submit against".to_string())
        }

        let handle = match self.client.submit(&item.text, self.parameters).await {
            Ok(handle) => handle,
            Err(e) => return ExecutionOutcome::SubmitError(e.detail()),
        };
        tracing::info!("  > query execution ID: {handle}");

        poll_until_terminal(self.client, &handle, self.settings).await
    }
}

fn log_report(report: &ItemReport) {
    match report.outcome {
        ExecutionOutcome::Succeeded => tracing::info!("  > {report}"),
        ExecutionOutcome::TimedOut => tracing::warn!("  > {report}"),
        _ => tracing::error!("  > {report}"),
    }
}
