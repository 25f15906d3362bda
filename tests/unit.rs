//! Unit tests for pitchpx library modules

#[path = "unit/helpers/mod.rs"]
pub mod helpers;

#[path = "unit/config_test.rs"]
mod config_test;

#[path = "unit/reconstruct_test.rs"]
mod reconstruct_test;

#[path = "unit/boxscore_test.rs"]
mod boxscore_test;
