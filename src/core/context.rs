use reqwest::Client as HttpClient;

use crate::core::config::AppConfig;

/// Shared immutable state handed to every inbound handler.
///
/// Built once at startup and injected through `web::Data`, so handlers have
/// no process-wide globals to reach for. The HTTP client here serves only the
/// synchronous request path; background tasks construct their own.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub http: HttpClient,
}

impl AppContext {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            http: HttpClient::new(),
        }
    }
}
