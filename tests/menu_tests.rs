use next_t::slack::menu::{MENU_PROMPT, build_stop_menu};
use next_t::transit::aggregate::StopCandidate;

/// Tests for the block-kit stop menu.
/// The menu must be a 1:1, order-preserving image of the candidate set, with
/// the button value carrying the `"<routeId>,<stopId>"` round-trip encoding.

fn candidate(route_id: &str, stop_id: &str, stop_name: &str) -> StopCandidate {
    StopCandidate {
        route_id: route_id.to_string(),
        stop_id: stop_id.to_string(),
        stop_name: stop_name.to_string(),
    }
}

#[test]
fn menu_has_one_button_per_candidate_in_order() {
    let candidates = vec![
        candidate("Red", "place-davis", "Davis"),
        candidate("Orange", "place-sull", "Sullivan Square"),
        candidate("Green-E", "place-lech", "Lechmere"),
    ];

    let blocks = build_stop_menu(&candidates);
    let elements = blocks[1]["elements"]
        .as_array()
        .expect("actions block should carry an element array");

    assert_eq!(
        elements.len(),
        candidates.len(),
        "Exactly one button per candidate"
    );

    let values: Vec<&str> = elements
        .iter()
        .map(|e| e["value"].as_str().unwrap())
        .collect();
    assert_eq!(
        values,
        vec!["Red,place-davis", "Orange,place-sull", "Green-E,place-lech"],
        "Button values must encode routeId,stopId in candidate order"
    );
}

#[test]
fn button_labels_combine_route_and_stop_name() {
    let blocks = build_stop_menu(&[candidate("Red", "place-davis", "Davis")]);
    let button = &blocks[1]["elements"][0];

    assert_eq!(button["type"], "button");
    assert_eq!(button["text"]["type"], "plain_text");
    assert_eq!(button["text"]["text"], "Red Davis");
}

#[test]
fn menu_carries_the_prompt_section_and_action_block_id() {
    let blocks = build_stop_menu(&[candidate("Red", "place-davis", "Davis")]);

    assert_eq!(blocks[0]["type"], "section");
    assert_eq!(blocks[0]["text"]["type"], "mrkdwn");
    assert_eq!(blocks[0]["text"]["text"], MENU_PROMPT);
    assert_eq!(blocks[1]["type"], "actions");
    assert_eq!(blocks[1]["block_id"], "stop choice");
}

#[test]
fn empty_candidate_set_yields_an_empty_action_block() {
    // The aggregator never produces an empty set, but the builder itself is a
    // pure transformation and should not assume that
    let blocks = build_stop_menu(&[]);
    let elements = blocks[1]["elements"].as_array().unwrap();

    assert!(elements.is_empty());
}
