use std::fmt;

use crate::config::ConfigError;
use crate::model::ParseEnumError;
use crate::roster::RosterError;

/// Stable error codes for everything around the engine.
///
/// The engine itself has no failure modes; these codes cover the edges:
/// roster files, config files, and flag parsing. `E9001` is reserved for
/// failures nothing else claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    RosterNotFound,
    RosterReadFailed,
    RosterParseError,
    ConfigReadFailed,
    ConfigParseError,
    InvalidStrategyValue,
    InternalUnexpected,
}

impl ErrorCode {
    /// The `E####` identifier rendered in JSON error output.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::RosterNotFound => "E1001",
            Self::RosterReadFailed => "E1002",
            Self::RosterParseError => "E1003",
            Self::ConfigReadFailed => "E1101",
            Self::ConfigParseError => "E1102",
            Self::InvalidStrategyValue => "E2001",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// One-line summary used in logs and error headers.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::RosterNotFound => "Roster file missing",
            Self::RosterReadFailed => "Roster file unreadable",
            Self::RosterParseError => "Roster JSON did not parse",
            Self::ConfigReadFailed => "Config file unreadable",
            Self::ConfigParseError => "Config TOML did not parse",
            Self::InvalidStrategyValue => "Unknown strategy name",
            Self::InternalUnexpected => "Unexpected internal failure",
        }
    }

    /// Suggested next step for whoever hit the error, when one exists.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::RosterNotFound => Some("Check the roster path passed to `csb`."),
            Self::RosterReadFailed => Some("Check read permissions on the roster file."),
            Self::RosterParseError => {
                Some("Fix the roster JSON: {\"agents\": [..], \"customers\": [..], \"unavailable\": [..]}.")
            }
            Self::ConfigReadFailed => Some("Check read permissions on the config file."),
            Self::ConfigParseError => Some("Fix syntax in csbal.toml and retry."),
            Self::InvalidStrategyValue => Some("Use one of: scan, lower-bound."),
            Self::InternalUnexpected => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Aggregate error for everything the edges can raise.
///
/// Commands hold one of these, map it to an [`ErrorCode`], and render the
/// code, message, and hint in both human and JSON output.
#[derive(Debug, thiserror::Error)]
pub enum CsbalError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Strategy(#[from] ParseEnumError),
}

impl CsbalError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Roster(RosterError::NotFound { .. }) => ErrorCode::RosterNotFound,
            Self::Roster(RosterError::Io { .. }) => ErrorCode::RosterReadFailed,
            Self::Roster(RosterError::Parse { .. }) => ErrorCode::RosterParseError,
            Self::Config(ConfigError::Io { .. }) => ErrorCode::ConfigReadFailed,
            Self::Config(ConfigError::Parse { .. }) => ErrorCode::ConfigParseError,
            Self::Strategy(_) => ErrorCode::InvalidStrategyValue,
        }
    }

    /// Remediation guidance for terminal and JSON error output.
    #[must_use]
    pub fn suggestion(&self) -> String {
        self.error_code()
            .hint()
            .map_or_else(|| "See `csb --help` for usage.".to_string(), str::to_string)
    }
}
