use next_t::slack::command_parser::{decode_url_component, parse_form_data};

#[test]
fn test_decode_url_component() {
    // Test URL decoding with percent-encoded characters
    let encoded = "davis%20square";
    let decoded = decode_url_component(encoded).unwrap();
    assert_eq!(decoded, "davis square");

    // Test URL decoding with plus signs representing spaces
    let encoded_plus = "davis+square";
    let decoded_plus = decode_url_component(encoded_plus).unwrap();
    assert_eq!(decoded_plus, "davis square");

    // Test decoding with special characters
    let special_chars = "1%20Main%20St%2C%20Cambridge%20MA";
    let decoded_special = decode_url_component(special_chars).unwrap();
    assert_eq!(decoded_special, "1 Main St, Cambridge MA");
}

#[test]
fn test_parse_form_data_success() {
    // Valid form data mimicking a slash command invocation
    let form_data = "token=abc123&team_id=T123&channel_id=C123&\
                    channel_name=general&user_id=U123&user_name=rider&\
                    command=%2Fnextt&text=davis+square&\
                    response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2FT123%2Fabc&\
                    trigger_id=123.456";

    let event = parse_form_data(form_data).unwrap();

    // Verify fields were parsed correctly
    assert_eq!(event.token, "abc123");
    assert_eq!(event.team_id, "T123");
    assert_eq!(event.channel_id, "C123");
    assert_eq!(event.user_id, "U123");
    assert_eq!(event.command, "/nextt");
    assert_eq!(event.text, "davis square");
    assert_eq!(
        event.response_url,
        "https://hooks.slack.com/commands/T123/abc"
    );
}

#[test]
fn test_parse_form_data_missing_fields() {
    // Missing fields get default values rather than failing the request
    let incomplete_data = "token=abc123&team_id=T123";
    let result = parse_form_data(incomplete_data);

    assert!(result.is_ok());
    let event = result.unwrap();

    assert_eq!(event.token, "abc123");
    assert_eq!(event.team_id, "T123");
    assert_eq!(event.text, "");
    assert_eq!(event.response_url, "");
}

#[test]
fn test_parse_form_data_ignores_unknown_fields() {
    // Slack adds fields over time; unknown keys must not break parsing
    let form_data = "text=davis&api_app_id=A123&is_enterprise_install=false";
    let event = parse_form_data(form_data).unwrap();

    assert_eq!(event.text, "davis");
}
