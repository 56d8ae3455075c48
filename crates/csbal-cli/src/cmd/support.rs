use std::path::Path;

use anyhow::Result;
use csbal_core::config;
use csbal_core::error::CsbalError;
use csbal_core::model::{AgentId, SearchStrategy};
use csbal_core::roster::{self, Roster};
use tracing::debug;

use crate::output::{CliError, OutputMode, render_error};

/// One command's fully resolved engine inputs.
#[derive(Debug)]
pub(crate) struct BalanceInputs {
    pub roster: Roster,
    pub away: Vec<AgentId>,
    pub strategy: SearchStrategy,
}

/// Load the roster and resolve the strategy for a balancing command.
///
/// `--away` ids are unioned with the roster's own `unavailable` list.
/// Failures are rendered to stderr in the requested output mode before the
/// command aborts, so `main` only surfaces a terse duplicate.
pub(crate) fn resolve_inputs(
    roster_path: &Path,
    away_flags: &[AgentId],
    cli_strategy: Option<SearchStrategy>,
    output: OutputMode,
    project_root: &Path,
) -> Result<BalanceInputs> {
    let config = match config::resolve_config(project_root, cli_strategy) {
        Ok(config) => config,
        Err(err) => {
            return rendered_failure(output, &CsbalError::from(err), "config not loaded");
        }
    };

    let roster = match roster::load_roster(roster_path) {
        Ok(roster) => roster,
        Err(err) => {
            return rendered_failure(output, &CsbalError::from(err), "roster not loaded");
        }
    };

    let mut away = roster.unavailable.clone();
    away.extend_from_slice(away_flags);

    debug!(
        agents = roster.agents.len(),
        customers = roster.customers.len(),
        away = away.len(),
        strategy = %config.strategy,
        "roster loaded"
    );

    Ok(BalanceInputs {
        roster,
        away,
        strategy: config.strategy,
    })
}

fn rendered_failure<T>(output: OutputMode, err: &CsbalError, what: &str) -> Result<T> {
    render_error(output, &CliError::from(err))?;
    anyhow::bail!("{what}")
}
