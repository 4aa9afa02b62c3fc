//! Deferred lookup execution and webhook delivery

pub mod deliver;
pub mod handler;

use tracing::error;

use crate::core::config::AppConfig;
use crate::core::models::LookupTask;

/// Failure message delivered when the prediction query cannot be completed.
pub const LOOKUP_FAILURE_MESSAGE: &str =
    "There was an error looking up departure information.";

/// Informational message delivered when nothing qualifies near the user.
pub const NO_NEARBY_DEPARTURES_MESSAGE: &str = "No scheduled departure was found near you";

/// Detach an area lookup from the synchronous request path.
///
/// Returns as soon as the task is handed to the runtime; the acknowledgment
/// goes back to Slack before the upstream query starts. Best-effort only: the
/// job is not persisted, not replayed, and not ordered relative to other
/// jobs. Failures inside the job become a delivered error message and never
/// reach the caller, which has already responded.
pub fn dispatch(config: AppConfig, task: LookupTask) {
    tokio::spawn(async move {
        let correlation_id = task.correlation_id.clone();
        if let Err(e) = handler::run_lookup_task(&config, &task).await {
            // Terminal delivery failed too; the callback window is Slack's
            // to enforce, so there is nothing left to do but log.
            error!(
                "Lookup task failed without delivery (correlation_id={}): {}",
                correlation_id, e
            );
        }
    });
}
