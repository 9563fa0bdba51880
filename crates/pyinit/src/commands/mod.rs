//! CLI command implementations

pub mod config;
pub mod new;
pub mod version;
