//! Scripted execution client for exercising the poll loop and runner.

use super::{EngineError, ExecutionClient, ExecutionHandle, ExecutionParameters, ExecutionState, ExecutionStatus};

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;


/// Replays queued status responses in order; once the script runs out,
/// `fallback` is returned for every further call.
pub struct ScriptedClient {
    statuses: Mutex<VecDeque<Result<ExecutionStatus, String>>>,
    fallback: ExecutionStatus,
    reject_marker: Option<String>,
    status_delay: Duration,
    submissions: Mutex<Vec<String>>,
    status_calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new(fallback: ExecutionState) -> Self {
        ScriptedClient {
            statuses: Mutex::new(VecDeque::new()),
            fallback: ExecutionStatus::new(fallback),
            reject_marker: None,
            status_delay: Duration::ZERO,
            submissions: Mutex::new(Vec::new()),
            status_calls: AtomicUsize::new(0),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(ExecutionState::Succeeded)
    }

    pub fn then(self, status: ExecutionStatus) -> Self {
        self.statuses.lock().unwrap().push_back(Ok(status));
        self
    }

    pub fn then_state(self, state: ExecutionState, times: usize) -> Self {
        (0..times).fold(self, |client, _| client.then(ExecutionStatus::new(state.clone())))
    }

    pub fn then_error(self, message: &str) -> Self {
        self.statuses.lock().unwrap().push_back(Err(message.to_string()));
        self
    }

    /// Refuse submission of any query whose text contains `marker`.
    pub fn rejecting(mut self, marker: &str) -> Self {
        self.reject_marker = Some(marker.to_string());
        self
    }

    pub fn with_status_delay(mut self, delay: Duration) -> Self {
        self.status_delay = delay;
        self
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> Vec<String> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExecutionClient for ScriptedClient {
    async fn submit(
        &self,
        text: &str,
        _parameters: &ExecutionParameters,
    ) -> Result<ExecutionHandle, EngineError> {
        if self.reject_marker.as_deref().is_some_and(|marker| text.contains(marker)) {
            return Err(EngineError::submit("InvalidRequestException: rejected"));
        }

        let mut submissions = self.submissions.lock().unwrap();
        submissions.push(text.to_string());
        Ok(ExecutionHandle::from(format!("execution-{}", submissions.len())))
    }

    async fn get_status(&self, _handle: &ExecutionHandle) -> Result<ExecutionStatus, EngineError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        if !self.status_delay.is_zero() {
            tokio::time::sleep(self.status_delay).await;
        }

        let next = self.statuses.lock().unwrap().pop_front();
        match next {
            Some(Ok(status)) => Ok(status),
            Some(Err(message)) => Err(EngineError::status(message)),
            None => Ok(self.fallback.clone()),
        }
    }
}
