use serde_json::{Value, json};

use crate::transit::aggregate::StopCandidate;

/// Prompt shown above the stop buttons.
pub const MENU_PROMPT: &str = "Which stop would you like times for?";

/// Build the block-kit menu offering one button per candidate stop.
///
/// Pure transformation: candidate order is preserved exactly, the button
/// label is `"<routeId> <stopName>"`, and the button value encodes
/// `"<routeId>,<stopId>"` for the interaction round-trip.
#[must_use]
pub fn build_stop_menu(candidates: &[StopCandidate]) -> Value {
    let buttons: Vec<Value> = candidates
        .iter()
        .map(|candidate| {
            json!({
                "type": "button",
                "text": {
                    "type": "plain_text",
                    "text": format!("{} {}", candidate.route_id, candidate.stop_name),
                },
                "value": format!("{},{}", candidate.route_id, candidate.stop_id),
            })
        })
        .collect();

    json!([
        {
            "type": "section",
            "text": { "type": "mrkdwn", "text": MENU_PROMPT },
        },
        {
            "type": "actions",
            "block_id": "stop choice",
            "elements": buttons,
        }
    ])
}
