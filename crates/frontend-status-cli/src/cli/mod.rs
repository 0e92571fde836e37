//! CLI subcommand implementations for the frontend-status binary.

pub mod args;
pub mod check_cmd;
pub mod groups_cmd;
pub mod output;
