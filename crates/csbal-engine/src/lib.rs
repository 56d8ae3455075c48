#![forbid(unsafe_code)]
//! csbal-engine library.
//!
//! The balancing engine: availability filtering, stable score sort,
//! threshold assignment, tallying, and winner reduction. Everything here is
//! pure and in-memory; roster files and rendering live in `csbal-core` and
//! the CLI.
//!
//! # Conventions
//!
//! - **Errors**: none. The engine is total; empty inputs, unmatched
//!   customers, and tied tallies are ordinary results.
//! - **Logging**: `tracing` macros (`debug!` at decision points).

pub mod balance;
pub mod fixtures;
pub mod report;
pub mod winner;

pub use balance::{EngineConfig, balance, balance_with_config, compute};
pub use report::{AgentTally, BalanceReport};
pub use winner::reduce_winner;
