//! Command-line front end for the `frontend_status` crate.

pub mod cli;
