#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use csbal_core::{config, timing};
use output::OutputMode;
use std::env;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "csb: customer-success load balancer",
    long_about = None
)]
struct Cli {
    /// Verbose mode.
    #[arg(short, long)]
    verbose: bool,

    /// Print a timing digest to stderr when the command finishes.
    #[arg(long, global = true)]
    timing: bool,

    /// Shorthand for `--format json`.
    #[arg(long, global = true)]
    json: bool,

    /// Output format (overrides the FORMAT env var and config files).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Balancing",
        about = "Balance a roster and report per-agent tallies",
        long_about = "Balance customers across available agents and print the full report: per-agent tallies, assignment totals, and the winner.",
        after_help = "EXAMPLES:\n    # Balance a roster\n    csb balance roster.json\n\n    # Send agents 2 and 4 away for this run\n    csb balance roster.json --away 2,4\n\n    # Emit machine-readable output\n    csb balance roster.json --json"
    )]
    Balance(cmd::balance::BalanceArgs),

    #[command(
        next_help_heading = "Balancing",
        about = "Print only the winning agent id",
        long_about = "Balance customers across available agents and print the winning agent id, or 0 when no single agent holds the maximum tally.",
        after_help = "EXAMPLES:\n    # Print the winner\n    csb winner roster.json\n\n    # Override the search strategy\n    csb winner roster.json --strategy scan\n\n    # Emit machine-readable output\n    csb winner roster.json --json"
    )]
    Winner(cmd::winner::WinnerArgs),

    #[command(
        next_help_heading = "Shell Integration",
        about = "Emit a completion script for your shell",
        long_about = "Write a completion script for the named shell to stdout, ready to be sourced from the shell's init file.",
        after_help = "EXAMPLES:\n    # Bash completions\n    csb completions bash\n\n    # Zsh completions\n    csb completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CSBAL_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "csbal_core=debug,csbal_engine=debug,csbal_cli=debug,info"
        } else {
            "csbal_core=info,csbal_engine=info,csbal_cli=info,warn"
        })
    });

    let format = env::var("CSBAL_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let timing_enabled = cli.timing || timing::enabled_by_env();
    timing::set_recording(timing_enabled);
    timing::clear_ledger();

    if cli.verbose {
        info!("verbose mode enabled");
    }

    let project_root = std::env::current_dir()?;

    // Both config files participate in output mode resolution, and a broken
    // config must not block completions or error rendering. The peek is
    // lenient; commands that actually need config reload it strictly and
    // report the parse error.
    let project_format = config::load_project_config(&project_root)
        .ok()
        .and_then(|project| project.output.format);
    let user_format = config::load_user_config().ok().and_then(|user| user.output);
    let output = output::resolve_output_mode(
        cli.format,
        cli.json,
        project_format.as_deref(),
        user_format.as_deref(),
    );

    let command_result = match cli.command {
        Commands::Balance(ref args) => timing::timed("cmd.balance", || {
            cmd::balance::run_balance(args, output, &project_root)
        }),
        Commands::Winner(ref args) => timing::timed("cmd.winner", || {
            cmd::winner::run_winner(args, output, &project_root)
        }),
        Commands::Completions(args) => timing::timed("cmd.completions", || {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }),
    };

    if timing_enabled {
        let digest = timing::digest();
        if digest.is_empty() {
            eprintln!("timing report: no samples");
        } else {
            eprintln!("timing report:");
            eprintln!("{}", digest.render_table());
            eprintln!("timing report (json):");
            eprintln!("{}", serde_json::to_string_pretty(&digest.to_json())?);
        }
    }

    command_result
}
