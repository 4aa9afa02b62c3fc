//! Process-wide configuration, shared context, and task models

pub mod config;
pub mod context;
pub mod models;
