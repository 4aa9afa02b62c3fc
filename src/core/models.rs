/// A deferred area lookup, created when a slash command is acknowledged.
///
/// Carries only immutable inputs; the background task that runs it builds its
/// own HTTP clients and shares no state with other tasks.
#[derive(Debug, Clone)]
pub struct LookupTask {
    pub correlation_id: String,
    pub response_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A stop choice recovered from a button interaction payload.
#[derive(Debug, Clone)]
pub struct StopSelection {
    pub route_id: String,
    pub stop_id: String,
    pub stop_label: String,
    pub response_url: String,
}
