//! `csb balance`: full balancing report for one roster.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use csbal_core::model::{AgentId, SearchStrategy};
use csbal_engine::{BalanceReport, EngineConfig, balance_with_config};

use crate::cmd::support::resolve_inputs;
use crate::output::{OutputMode, render_mode, write_kv, write_rule, write_section};

/// Arguments for `csb balance`.
#[derive(Args, Debug)]
pub struct BalanceArgs {
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

/// Execute `csb balance`.
pub fn run_balance(
    args: &BalanceArgs,
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

    render_mode(output, &report, render_balance_text, render_balance_pretty)
}

fn render_balance_text(report: &BalanceReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "ID  SCORE  ASSIGNED")?;
    for tally in &report.tallies {
        writeln!(w, "{}  {}  {}", tally.id, tally.score, tally.assigned)?;
    }
    writeln!(w, "winner  {}", report.winner)?;
    writeln!(w, "assigned  {}", report.assigned)?;
    writeln!(w, "unassigned  {}", report.unassigned)?;
    writeln!(w, "away  {}", report.away)?;
    writeln!(w, "strategy  {}", report.strategy)
}

fn render_balance_pretty(report: &BalanceReport, w: &mut dyn Write) -> std::io::Result<()> {
    write_section(w, "Balance report")?;

    if report.tallies.is_empty() {
        writeln!(w, "  no agents available")?;
    } else {
        writeln!(w, "  {:>6}  {:>6}  {:>8}", "ID", "SCORE", "ASSIGNED")?;
        for tally in &report.tallies {
            writeln!(
                w,
                "  {:>6}  {:>6}  {:>8}",
                tally.id, tally.score, tally.assigned
            )?;
        }
    }

    write_rule(w)?;
    let winner_line = report.winner_id().map_or_else(
        || "none (no strict maximum)".to_string(),
        |id| format!("agent {id}"),
    );
    write_kv(w, "winner", winner_line)?;
    write_kv(w, "assigned", report.assigned.to_string())?;
    write_kv(w, "unassigned", report.unassigned.to_string())?;
    write_kv(w, "away", report.away.to_string())?;
    write_kv(w, "strategy", report.strategy.to_string())
}
