//! Command handlers for the pitchpx CLI.
//!
//! Each submodule handles one command or command group. Dispatch lives in
//! main.rs.

pub mod classify;
pub mod config;
pub mod scrape;
