#![forbid(unsafe_code)]
//! csbal-core library.
//!
//! Domain model, roster files, configuration, error codes, and the opt-in
//! timing ledger shared by the engine and the CLI.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums per module, aggregated into
//!   [`error::CsbalError`] at the edges. The engine itself never fails.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod model;
pub mod roster;
pub mod timing;

pub use config::{
    ConfigError, EffectiveConfig, ProjectConfig, UserConfig, load_project_config,
    load_user_config, resolve_config, resolve_strategy,
};
pub use error::{CsbalError, ErrorCode};
pub use model::{Agent, AgentId, Customer, ParseEnumError, SearchStrategy};
pub use roster::{Roster, RosterError, load_roster};
