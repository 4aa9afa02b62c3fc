//! Handler for button interactions from a delivered stop menu.
//!
//! Unlike the slash path, the scoped query runs synchronously: the
//! interaction acknowledgment has its own deadline budget, and the result
//! goes out through the payload's callback URL either way.

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{error, info};

use crate::api::parsing::{extract_selection, parse_interactive_payload};
use crate::api::signature::verify_request;
use crate::core::context::AppContext;
use crate::transit::client::TransitClient;
use crate::transit::format::format_next_departure;
use crate::worker::{LOOKUP_FAILURE_MESSAGE, deliver};

#[actix_web::post("/interaction")]
pub async fn interaction(
    req: HttpRequest,
    body: web::Bytes,
    ctx: web::Data<AppContext>,
) -> HttpResponse {
    let body_str = String::from_utf8_lossy(&body);
    if !verify_request(&req, &body_str, &ctx.config.slack_signing_secret) {
        return HttpResponse::Forbidden().body("invalid request");
    }

    let payload = match parse_interactive_payload(&body_str) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Interactive payload parse error: {}", e);
            return HttpResponse::BadRequest().body(format!("Parse Error: {e}"));
        }
    };

    let selection = match extract_selection(&payload) {
        Ok(selection) => selection,
        Err(e) => {
            error!("Interactive payload missing selection: {}", e);
            return HttpResponse::BadRequest().body(format!("Parse Error: {e}"));
        }
    };

    info!(
        "Scoped lookup for route {} stop {}",
        selection.route_id, selection.stop_id
    );

    let transit = TransitClient::new(&ctx.config);
    let message = match transit
        .predictions_for_stop(&selection.route_id, &selection.stop_id)
        .await
    {
        Ok(predictions) => format_next_departure(&predictions, &selection.stop_label),
        Err(e) => {
            error!(
                "Scoped prediction query failed for {}/{}: {}",
                selection.route_id, selection.stop_id, e
            );
            LOOKUP_FAILURE_MESSAGE.to_string()
        }
    };

    if let Err(e) = deliver::send_text(&ctx.http, &selection.response_url, &message).await {
        error!("Failed to deliver scoped prediction: {}", e);
    }

    // The prediction went to the response URL; the interaction itself only
    // needs a blank acknowledgment.
    HttpResponse::Ok().body("")
}
