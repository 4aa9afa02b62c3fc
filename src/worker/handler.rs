use reqwest::Client as HttpClient;
use tracing::{error, info};

use super::deliver;
use super::{LOOKUP_FAILURE_MESSAGE, NO_NEARBY_DEPARTURES_MESSAGE};
use crate::core::config::AppConfig;
use crate::core::models::LookupTask;
use crate::errors::BotError;
use crate::slack::menu::build_stop_menu;
use crate::transit::aggregate::collect_stop_candidates;
use crate::transit::client::TransitClient;

/// Body of a deferred area lookup. Queries predictions around the resolved
/// coordinates and delivers exactly one terminal message to the callback URL:
/// a stop menu, a no-result notice, or an error.
///
/// The task owns a fresh transit client and webhook client; nothing is shared
/// with other in-flight tasks.
pub async fn run_lookup_task(config: &AppConfig, task: &LookupTask) -> Result<(), BotError> {
    info!(
        "Running area lookup at ({}, {}) (correlation_id={})",
        task.latitude, task.longitude, task.correlation_id
    );

    let transit = TransitClient::new(config);
    let http_client = HttpClient::new();

    let predictions = match transit.predictions_near(task.latitude, task.longitude).await {
        Ok(predictions) => predictions,
        Err(e) => {
            error!(
                "Prediction query failed (correlation_id={}): {}",
                task.correlation_id, e
            );
            return deliver::send_text(&http_client, &task.response_url, LOOKUP_FAILURE_MESSAGE)
                .await;
        }
    };

    match collect_stop_candidates(&predictions) {
        Some(candidates) => {
            info!(
                "Offering {} candidate stops (correlation_id={})",
                candidates.len(),
                task.correlation_id
            );
            let menu = build_stop_menu(&candidates);
            deliver::send_menu(&http_client, &task.response_url, &menu).await
        }
        None => {
            info!(
                "No qualifying departures (correlation_id={})",
                task.correlation_id
            );
            deliver::send_text(
                &http_client,
                &task.response_url,
                NO_NEARBY_DEPARTURES_MESSAGE,
            )
            .await
        }
    }
}
