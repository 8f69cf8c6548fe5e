use super::{EngineError, EngineErrorKind, ExecutionClient, ExecutionHandle, ExecutionParameters, ExecutionState, ExecutionStatus};

use async_trait::async_trait;
use aws_sdk_athena::config::Region;
use aws_sdk_athena::error::DisplayErrorContext;
use aws_sdk_athena::types::QueryExecutionContext;
use aws_sdk_athena::Client;


/// The Athena Engine submits queries through the AWS SDK,
/// using the default credential chain of the host.
pub struct AthenaEngine {
    client: Client,
}

impl AthenaEngine {
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        AthenaEngine { client: Client::new(&config) }
    }
}

#[async_trait]
impl ExecutionClient for AthenaEngine {
    async fn submit(
        &self,
        text: &str,
        parameters: &ExecutionParameters,
    ) -> Result<ExecutionHandle, EngineError> {
        let context = QueryExecutionContext::builder()
            .catalog(&parameters.catalog)
            .database(&parameters.database)
            .build();

        let output = self.client
            .start_query_execution()
            .query_execution_context(context)
            .work_group(&parameters.workgroup)
            .query_string(text)
            .send()
            .await
            .map_err(|e| EngineError::submit(DisplayErrorContext(&e).to_string()))?;

        output
            .query_execution_id()
            .map(ExecutionHandle::from)
            .ok_or(EngineError { kind: EngineErrorKind::MissingExecutionId })
    }

    async fn get_status(&self, handle: &ExecutionHandle) -> Result<ExecutionStatus, EngineError> {
        let output = self.client
            .get_query_execution()
            .query_execution_id(handle.as_str())
            .send()
            .await
            .map_err(|e| EngineError::status(DisplayErrorContext(&e).to_string()))?;

        let status = output
            .query_execution()
            .and_then(|execution| execution.status())
            .ok_or_else(|| EngineError { kind: EngineErrorKind::MissingStatus(handle.clone()) })?;

        let state = status
            .state()
            .map(|state| ExecutionState::parse(state.as_str()))
            .ok_or_else(|| EngineError { kind: EngineErrorKind::MissingStatus(handle.clone()) })?;

        Ok(match status.state_change_reason() {
            Some(reason) => ExecutionStatus::new(state).with_reason(reason),
            None => ExecutionStatus::new(state),
        })
    }
}
