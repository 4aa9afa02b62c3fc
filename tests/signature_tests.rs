use std::time::{SystemTime, UNIX_EPOCH};

use next_t::api::signature::{compute_signature, verify_slack_signature};

/// Tests for the inbound request signature gate.
/// A request must be rejected on a tampered signature or an out-of-range
/// timestamp, independent of the body content.

const SIGNING_SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_secs()
}

#[test]
fn freshly_signed_request_verifies() {
    let body = "token=abc&text=davis+square&response_url=https%3A%2F%2Fhooks.slack.com%2F";
    let timestamp = now_secs().to_string();
    let signature = compute_signature(&timestamp, body, SIGNING_SECRET);

    assert!(
        verify_slack_signature(body, &timestamp, &signature, SIGNING_SECRET),
        "A request signed with the shared secret and a fresh timestamp must pass"
    );
}

#[test]
fn tampered_body_is_rejected() {
    let timestamp = now_secs().to_string();
    let signature = compute_signature(&timestamp, "text=davis", SIGNING_SECRET);

    assert!(
        !verify_slack_signature("text=harvard", &timestamp, &signature, SIGNING_SECRET),
        "A signature computed over a different body must fail"
    );
}

#[test]
fn tampered_signature_is_rejected() {
    let body = "text=davis";
    let timestamp = now_secs().to_string();
    let mut signature = compute_signature(&timestamp, body, SIGNING_SECRET);
    signature.truncate(signature.len() - 1);
    signature.push('0');

    assert!(!verify_slack_signature(
        body,
        &timestamp,
        &signature,
        SIGNING_SECRET
    ));
}

#[test]
fn wrong_secret_is_rejected() {
    let body = "text=davis";
    let timestamp = now_secs().to_string();
    let signature = compute_signature(&timestamp, body, "some-other-secret");

    assert!(!verify_slack_signature(
        body,
        &timestamp,
        &signature,
        SIGNING_SECRET
    ));
}

#[test]
fn stale_timestamp_is_rejected_even_with_a_valid_signature() {
    // Replay guard: five minutes is the cutoff, test well past it
    let body = "text=davis";
    let timestamp = (now_secs() - 600).to_string();
    let signature = compute_signature(&timestamp, body, SIGNING_SECRET);

    assert!(
        !verify_slack_signature(body, &timestamp, &signature, SIGNING_SECRET),
        "A correctly signed but stale request must be rejected"
    );
}

#[test]
fn far_future_timestamp_is_rejected() {
    let body = "text=davis";
    let timestamp = (now_secs() + 600).to_string();
    let signature = compute_signature(&timestamp, body, SIGNING_SECRET);

    assert!(
        !verify_slack_signature(body, &timestamp, &signature, SIGNING_SECRET),
        "A timestamp far ahead of local time must be rejected"
    );
}

#[test]
fn empty_headers_are_rejected() {
    assert!(!verify_slack_signature(
        "text=davis",
        "",
        "",
        SIGNING_SECRET
    ));
}
