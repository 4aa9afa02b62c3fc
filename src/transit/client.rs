use reqwest::Client as HttpClient;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::error;

use crate::core::config::AppConfig;
use crate::errors::BotError;
use crate::transit::models::PredictionResponse;

/// Client for the provider's prediction endpoint.
///
/// Every query asks for the related stop and route objects and for results
/// sorted by ascending departure time, so callers can rely on the provider's
/// ordering. Each background job constructs its own client; nothing here is
/// shared across jobs.
#[derive(Debug)]
pub struct TransitClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl TransitClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: config.transit_api_base.clone(),
            api_key: config.transit_api_key.clone(),
        }
    }

    /// All predictions near a coordinate, provider-sorted by departure time.
    pub async fn predictions_near(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PredictionResponse, BotError> {
        self.fetch_predictions(&[
            ("filter[latitude]", latitude.to_string()),
            ("filter[longitude]", longitude.to_string()),
        ])
        .await
    }

    /// All predictions for one exact route/stop pair, same sort order.
    pub async fn predictions_for_stop(
        &self,
        route_id: &str,
        stop_id: &str,
    ) -> Result<PredictionResponse, BotError> {
        self.fetch_predictions(&[
            ("filter[route]", route_id.to_string()),
            ("filter[stop]", stop_id.to_string()),
        ])
        .await
    }

    async fn fetch_predictions(
        &self,
        filters: &[(&str, String)],
    ) -> Result<PredictionResponse, BotError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.api+json"));

        let url = format!("{}/predictions", self.base_url);
        let response = self
            .http
            .get(&url)
            .headers(headers)
            .header("x-api-key", &self.api_key)
            .query(filters)
            .query(&[("include", "stop,route"), ("sort", "departure_time")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            error!("Prediction query failed: status={}", status);
            return Err(BotError::Upstream(format!(
                "prediction query returned {}",
                status
            )));
        }

        let predictions = response
            .json::<PredictionResponse>()
            .await
            .map_err(|e| BotError::Upstream(format!("undecodable prediction body: {}", e)))?;

        Ok(predictions)
    }
}
