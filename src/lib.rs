//! deployctl library — exposes modules for integration testing.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod artifact;
pub mod checks;
pub mod cli;
pub mod command_runner;
pub mod commands;
pub mod context;
pub mod errors;
pub mod intent;
pub mod output;
pub mod terraform;
