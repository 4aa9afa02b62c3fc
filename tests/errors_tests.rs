use next_t::errors::BotError;
use std::error::Error;

#[test]
fn test_bot_error_implements_error_trait() {
    // Verify BotError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = BotError::Parse("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_bot_error_display() {
    // Verify Display implementation works correctly
    let error = BotError::Parse("bad payload".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to parse request: bad payload"
    );

    let error = BotError::Resolution("no match".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to resolve location: no match"
    );

    let error = BotError::Upstream("status 500".to_string());
    assert_eq!(
        format!("{error}"),
        "Transit provider request failed: status 500"
    );

    let error = BotError::Http("connection refused".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: connection refused"
    );
}

#[test]
fn test_bot_error_from_reqwest() {
    // We can't easily construct a reqwest::Error directly, but we can verify
    // that the From<reqwest::Error> conversion exists by checking that this
    // function compiles
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> BotError {
        BotError::from(err)
    }
}
