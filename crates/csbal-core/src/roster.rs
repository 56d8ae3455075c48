//! Roster files: the JSON aggregate handed to the engine by callers.
//!
//! A roster bundles the agents, the customers, and the ids of agents who
//! are away. The engine itself never reads files; this is the edge format
//! used by the CLI and by integration tooling.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::{Agent, AgentId, Customer};

/// One balancing computation's worth of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub agents: Vec<Agent>,
    pub customers: Vec<Customer>,
    /// Ids of agents excluded from this computation. Order irrelevant.
    #[serde(default)]
    pub unavailable: Vec<AgentId>,
}

/// Errors from loading a roster file.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The roster file does not exist.
    #[error("roster file not found: {path}")]
    NotFound { path: PathBuf },

    /// The roster file exists but could not be read.
    #[error("failed to read roster file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The roster file is not valid roster JSON.
    #[error("failed to parse roster file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a [`Roster`] from a JSON file.
///
/// Missing `unavailable` defaults to empty. An empty agent or customer
/// list is a valid roster; the engine defines results for both.
///
/// # Errors
///
/// Returns [`RosterError::NotFound`] if the file does not exist,
/// [`RosterError::Io`] if it cannot be read, or [`RosterError::Parse`] if
/// the contents do not match the roster schema.
pub fn load_roster(path: &Path) -> Result<Roster, RosterError> {
    if !path.exists() {
        return Err(RosterError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| RosterError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{RosterError, load_roster};
    use crate::model::{Agent, Customer};

    fn write_roster(dir: &tempfile::TempDir, name: &str, json: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, json).expect("write roster fixture");
        path
    }

    #[test]
    fn loads_full_roster() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_roster(
            &dir,
            "roster.json",
            r#"{
                "agents": [{"id": 1, "score": 60}, {"id": 2, "score": 20}],
                "customers": [{"id": 1, "score": 90}],
                "unavailable": [2]
            }"#,
        );

        let roster = load_roster(&path).expect("load should succeed");
        assert_eq!(roster.agents, vec![Agent::new(1, 60), Agent::new(2, 20)]);
        assert_eq!(roster.customers, vec![Customer::new(1, 90)]);
        assert_eq!(roster.unavailable, vec![2]);
    }

    #[test]
    fn unavailable_defaults_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_roster(
            &dir,
            "roster.json",
            r#"{"agents": [], "customers": []}"#,
        );

        let roster = load_roster(&path).expect("load should succeed");
        assert!(roster.agents.is_empty());
        assert!(roster.customers.is_empty());
        assert!(roster.unavailable.is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.json");

        let err = load_roster(&path).expect_err("load should fail");
        assert!(matches!(err, RosterError::NotFound { .. }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_roster(&dir, "broken.json", "{\"agents\": [");

        let err = load_roster(&path).expect_err("load should fail");
        assert!(matches!(err, RosterError::Parse { .. }));
    }
}
