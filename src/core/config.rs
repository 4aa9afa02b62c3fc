use std::env;

/// Default geocoder endpoint (HERE geocode v1).
pub const DEFAULT_GEOCODE_API_BASE: &str = "https://geocode.search.hereapi.com";

/// Default transit prediction endpoint (MBTA v3 API).
pub const DEFAULT_TRANSIT_API_BASE: &str = "https://api-v3.mbta.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_signing_secret: String,
    pub geocode_api_key: String,
    pub transit_api_key: String,
    pub geocode_api_base: String,
    pub transit_api_base: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            slack_signing_secret: env::var("SLACK_SIGNING_SECRET")
                .map_err(|e| format!("SLACK_SIGNING_SECRET: {}", e))?,
            geocode_api_key: env::var("HERE_API_KEY")
                .map_err(|e| format!("HERE_API_KEY: {}", e))?,
            transit_api_key: env::var("TRANSIT_API_KEY")
                .map_err(|e| format!("TRANSIT_API_KEY: {}", e))?,
            geocode_api_base: env::var("GEOCODE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEOCODE_API_BASE.to_string()),
            transit_api_base: env::var("TRANSIT_API_BASE")
                .unwrap_or_else(|_| DEFAULT_TRANSIT_API_BASE.to_string()),
            port: env::var("PORT")
                .map_err(|e| format!("PORT: {}", e))?
                .parse::<u16>()
                .map_err(|e| format!("PORT: {}", e))?,
        })
    }
}
