//! Slack-specific wire formats: slash command bodies and block-kit menus

pub mod command_parser;
pub mod menu;

// Re-export main types for convenience
pub use command_parser::{SlashCommandEvent, decode_url_component, parse_form_data};
pub use menu::build_stop_menu;
