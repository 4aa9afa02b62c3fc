//! Free-text location resolution through the geocoder.

use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::error;

use crate::core::config::AppConfig;
use crate::errors::BotError;

/// A resolved location: the address label shown back to the user plus the
/// coordinates handed to the area prediction query. Immutable once produced.
#[derive(Debug, Clone)]
pub struct GeocodedLocation {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    items: Vec<GeocodeItem>,
}

#[derive(Debug, Deserialize)]
struct GeocodeItem {
    title: String,
    position: GeocodePosition,
}

#[derive(Debug, Deserialize)]
struct GeocodePosition {
    lat: f64,
    lng: f64,
}

/// Resolve free text to the geocoder's single best match.
///
/// Ties and ambiguous matches are not surfaced; the first item of the result
/// list wins. Any non-success status, undecodable body, or empty result list
/// is a resolution failure, and the command path answers synchronously with
/// an error instead of spawning a lookup.
pub async fn resolve_location(
    http: &HttpClient,
    config: &AppConfig,
    text: &str,
) -> Result<GeocodedLocation, BotError> {
    let url = format!("{}/v1/geocode", config.geocode_api_base);
    let response = http
        .get(&url)
        .query(&[("q", text), ("apiKey", config.geocode_api_key.as_str())])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        error!("Geocode lookup failed: status={}", status);
        return Err(BotError::Resolution(format!(
            "geocode query returned {}",
            status
        )));
    }

    let geocode = response
        .json::<GeocodeResponse>()
        .await
        .map_err(|e| BotError::Resolution(format!("undecodable geocode body: {}", e)))?;

    let best = geocode
        .items
        .into_iter()
        .next()
        .ok_or_else(|| BotError::Resolution(format!("no geocode match for '{}'", text)))?;

    Ok(GeocodedLocation {
        label: best.title,
        lat: best.position.lat,
        lng: best.position.lng,
    })
}
