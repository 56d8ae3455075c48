//! `csb winner`: print only the winning agent id.

use std::path::{Path, PathBuf};

use clap::Args;
use csbal_core::model::{AgentId, SearchStrategy};
use csbal_engine::{EngineConfig, balance_with_config};
use serde::Serialize;

use crate::cmd::support::resolve_inputs;
use crate::output::{OutputMode, render};

/// Arguments for `csb winner`.
#[derive(Args, Debug)]
pub struct WinnerArgs {
    /// Path to the roster JSON file.
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    /// Extra agent ids to treat as away, unioned with the roster's own list.
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    pub away: Vec<AgentId>,

    /// Search strategy override: scan or lower-bound.
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<SearchStrategy>,
}

/// Result payload for `csb winner`.
#[derive(Debug, Serialize)]
pub struct WinnerPayload {
    /// Winning agent id, `0` when no agent holds a strict maximum.
    pub winner: AgentId,
}

/// Execute `csb winner`.
///
/// Human output is the bare id so the command composes in shell pipelines.
pub fn run_winner(
    args: &WinnerArgs,
    output: OutputMode,
    project_root: &Path,
) -> anyhow::Result<()> {
    let inputs = resolve_inputs(&args.roster, &args.away, args.strategy, output, project_root)?;

    let report = balance_with_config(
        &inputs.roster.agents,
        &inputs.roster.customers,
        &inputs.away,
        &EngineConfig {
            strategy: inputs.strategy,
        },
    );

    render(
        output,
        &WinnerPayload {
            winner: report.winner,
        },
        |payload, w| writeln!(w, "{}", payload.winner),
    )
}

#[cfg(test)]
mod tests {
    use super::WinnerPayload;

    #[test]
    fn payload_serializes_single_field() {
        let json = serde_json::to_value(WinnerPayload { winner: 3 }).expect("serialize");
        assert_eq!(json["winner"], 3);
        assert_eq!(json.as_object().map(serde_json::Map::len), Some(1));
    }
}
