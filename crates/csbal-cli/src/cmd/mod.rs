//! Command handlers for the `csb` binary.
//!
//! Each submodule owns one subcommand: its clap `Args` struct, its serialized
//! payload, and its `run_*` entry point called from `main`.

pub mod balance;
pub mod completions;
mod support;
pub mod winner;
