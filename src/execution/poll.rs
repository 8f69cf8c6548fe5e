use super::ExecutionOutcome;
use crate::db::{ExecutionClient, ExecutionHandle, ExecutionState, ExecutionStatus};

use std::time::Duration;
use tokio::time::MissedTickBehavior;


pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const POLL_TIMEOUT: Duration = Duration::from_secs(5);


/// Timing of the status poll. `interval` must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        PollSettings { interval: POLL_INTERVAL, timeout: POLL_TIMEOUT }
    }
}


/// Poll `handle` once per tick until the execution succeeds, fails, or the
/// deadline passes.
///
/// The first tick fires on entry, so at most `timeout / interval` status
/// calls are made. When the deadline and a tick are due at the same instant,
/// the deadline wins. An in-flight status call is abandoned once the deadline
/// passes. A timeout only stops local polling: the remote execution is not
/// cancelled and may still finish on its own.
pub async fn poll_until_terminal<C>(
    client: &C,
    handle: &ExecutionHandle,
    settings: PollSettings,
) -> ExecutionOutcome
where
    C: ExecutionClient + ?Sized,
{
    let deadline = tokio::time::sleep(settings.timeout);
    tokio::pin!(deadline);

    let mut ticker = tokio::time::interval(settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut cancelled_reported = false;

    loop {
        tokio::select! {
            biased;
            _ = &mut deadline => return ExecutionOutcome::TimedOut,
            _ = ticker.tick() => {}
        }

        let status = tokio::select! {
            biased;
            _ = &mut deadline => return ExecutionOutcome::TimedOut,
            status = client.get_status(handle) => status,
        };

        match status {
            Err(error) => return ExecutionOutcome::StatusError(error.detail()),
            Ok(ExecutionStatus { state: ExecutionState::Succeeded, .. }) => {
                return ExecutionOutcome::Succeeded
            }
            Ok(ExecutionStatus { state: ExecutionState::Failed, reason }) => {
                return ExecutionOutcome::Failed(reason.unwrap_or_default())
            }
            // Not terminal here: a cancelled execution runs into the deadline.
            Ok(ExecutionStatus { state: ExecutionState::Cancelled, .. }) => {
                if !cancelled_reported {
                    tracing::warn!("  > execution {handle} was cancelled remotely; waiting for timeout");
                    cancelled_reported = true;
                }
            }
            Ok(ExecutionStatus { state, .. }) => {
                tracing::debug!("  > execution {handle} is {state}");
            }
        }
    }
}
