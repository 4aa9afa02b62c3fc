//! Delivery to the ephemeral callback URL Slack supplies with each request.
//!
//! The URL is single-use and time-boxed (30 minutes); delivery is
//! fire-and-forget from the core's perspective, so a rejected post is logged
//! with its body and otherwise ignored.

use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::error;

use crate::errors::BotError;

/// POST a plain-text message to the callback URL.
pub async fn send_text(
    http_client: &HttpClient,
    response_url: &str,
    text: &str,
) -> Result<(), BotError> {
    post_payload(http_client, response_url, &json!({ "text": text })).await
}

/// POST a block-kit menu to the callback URL.
pub async fn send_menu(
    http_client: &HttpClient,
    response_url: &str,
    blocks: &Value,
) -> Result<(), BotError> {
    post_payload(http_client, response_url, &json!({ "blocks": blocks })).await
}

async fn post_payload(
    http_client: &HttpClient,
    response_url: &str,
    payload: &Value,
) -> Result<(), BotError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let resp = http_client
        .post(response_url)
        .headers(headers)
        .json(payload)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        error!(
            "response_url POST failed: status={} body={}",
            status, body_text
        );
    }
    Ok(())
}
