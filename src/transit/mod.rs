//! Transit provider integration: typed records, queries, aggregation, rendering

pub mod aggregate;
pub mod client;
pub mod format;
pub mod models;

// Re-export main types for convenience
pub use aggregate::{StopCandidate, collect_stop_candidates};
pub use client::TransitClient;
pub use format::format_next_departure;
pub use models::PredictionResponse;
