use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to parse request: {0}")]
    Parse(String),

    #[error("Failed to resolve location: {0}")]
    Resolution(String),

    #[error("Transit provider request failed: {0}")]
    Upstream(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::Http(error.to_string())
    }
}
