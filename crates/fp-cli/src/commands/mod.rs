//! CLI subcommand implementations.

pub mod audit;
pub mod delete;
pub mod list;
pub mod log;
pub mod preview;
pub mod summary;
pub mod types;
