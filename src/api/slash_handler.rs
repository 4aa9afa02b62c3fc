//! Handler for the location slash command.
//!
//! Slack expects a response within 3 seconds, so only the geocode step runs
//! inline; the prediction lookup is dispatched to a background task and the
//! handler answers with an acknowledgment naming the resolved address.

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::signature::verify_request;
use crate::core::context::AppContext;
use crate::core::models::LookupTask;
use crate::geocode;
use crate::slack::command_parser::parse_form_data;
use crate::worker;

/// Synchronous error shown when the location cannot be resolved. No lookup
/// task is spawned in that case.
pub const RESOLUTION_FAILURE_MESSAGE: &str = "There was an error looking up stop information.";

#[actix_web::post("/slash-command")]
pub async fn slash_command(
    req: HttpRequest,
    body: web::Bytes,
    ctx: web::Data<AppContext>,
) -> HttpResponse {
    // The signature covers the raw body bytes, before any form decoding.
    let body_str = String::from_utf8_lossy(&body);
    if !verify_request(&req, &body_str, &ctx.config.slack_signing_secret) {
        return HttpResponse::Forbidden().body("invalid request");
    }

    let event = match parse_form_data(&body_str) {
        Ok(event) => event,
        Err(e) => {
            error!("Failed to parse slash command body: {}", e);
            return HttpResponse::BadRequest().body(format!("Parse Error: {e}"));
        }
    };

    let location = match geocode::resolve_location(&ctx.http, &ctx.config, &event.text).await {
        Ok(location) => location,
        Err(e) => {
            error!("Location resolution failed for '{}': {}", event.text, e);
            return HttpResponse::Ok().body(RESOLUTION_FAILURE_MESSAGE);
        }
    };

    let correlation_id = Uuid::new_v4().to_string();
    info!(
        "Dispatching lookup near '{}' (correlation_id={})",
        location.label, correlation_id
    );

    worker::dispatch(
        ctx.config.clone(),
        LookupTask {
            correlation_id,
            response_url: event.response_url,
            latitude: location.lat,
            longitude: location.lng,
        },
    );

    HttpResponse::Ok().body(format!(
        "Looking up next arrival at closest stop to {}",
        location.label
    ))
}
