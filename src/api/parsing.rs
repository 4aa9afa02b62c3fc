use serde_json::Value;

use crate::core::models::StopSelection;
use crate::errors::BotError;
use crate::slack::command_parser::decode_url_component;

/// Extract and decode the `payload` field of an interaction request body.
pub fn parse_interactive_payload(form_body: &str) -> Result<Value, BotError> {
    for pair in form_body.split('&') {
        if let Some(eq_idx) = pair.find('=') {
            let key = &pair[..eq_idx];
            if key == "payload" {
                let raw_val = &pair[eq_idx + 1..];
                let decoded = decode_url_component(raw_val)
                    .map_err(|e| BotError::Parse(format!("Failed to decode payload: {}", e)))?;
                let v: Value = serde_json::from_str(&decoded)
                    .map_err(|e| BotError::Parse(format!("Invalid JSON payload: {}", e)))?;
                return Ok(v);
            }
        }
    }
    Err(BotError::Parse("Missing payload field".to_string()))
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn v_array<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    v_path(root, path).and_then(|v| v.as_array())
}

/// Recover the chosen stop from a button interaction payload.
///
/// The button value encodes `"<routeId>,<stopId>"` and the button label is
/// the user-visible stop name. Only the first action is considered.
pub fn extract_selection(payload: &Value) -> Result<StopSelection, BotError> {
    let response_url = v_str(payload, &["response_url"])
        .ok_or_else(|| BotError::Parse("Missing response_url in payload".to_string()))?;

    let action = v_array(payload, &["actions"])
        .and_then(|actions| actions.first())
        .ok_or_else(|| BotError::Parse("Missing actions in payload".to_string()))?;

    let value = action
        .get("value")
        .and_then(Value::as_str)
        .ok_or_else(|| BotError::Parse("Missing action value".to_string()))?;

    let stop_label = v_str(action, &["text", "text"])
        .ok_or_else(|| BotError::Parse("Missing action label".to_string()))?;

    let (route_id, stop_id) = value
        .split_once(',')
        .ok_or_else(|| BotError::Parse(format!("Malformed action value: {}", value)))?;

    Ok(StopSelection {
        route_id: route_id.to_string(),
        stop_id: stop_id.to_string(),
        stop_label: stop_label.to_string(),
        response_url: response_url.to_string(),
    })
}
