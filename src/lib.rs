//! next-t - A Slack bot that answers "when does the next train leave near me?".
//!
//! A slash command carries a free-text location. The bot geocodes it, returns
//! an acknowledgment within Slack's 3-second deadline, and spawns a background
//! task that queries the transit provider for nearby departure predictions.
//! The task posts either a button menu of candidate stops or a plain message
//! to the command's `response_url`. Picking a button arrives as an interaction
//! request, which is answered synchronously with the next departure for that
//! exact route/stop pair.
//!
//! # Architecture
//!
//! - actix-web hosts the two inbound endpoints (`/slash-command`,
//!   `/interaction`), both behind the Slack signature gate
//! - Tokio tasks carry the deferred area lookups; each task owns its inputs
//!   and HTTP clients, nothing is shared between jobs
//! - reqwest speaks to the geocoder, the transit provider, and the
//!   `response_url` webhook

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod geocode;
pub mod slack;
pub mod transit;
pub mod worker;

pub use errors::BotError;

/// Configure structured logging for the bot process.
///
/// Sets up tracing-subscriber with a compact fmt layer. Call once at startup,
/// before the server starts accepting requests.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
