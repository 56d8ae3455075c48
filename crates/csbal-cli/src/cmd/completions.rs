use anyhow::Result;
use clap::Args;
use clap_complete::{Shell, generate};

/// Arguments for `csb completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to emit a completion script for.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write a completion script for `shell` to stdout.
///
/// # Errors
///
/// Returns an error if stdout rejects the write.
pub fn run_completions(shell: Shell, command: &mut clap::Command) -> Result<()> {
    generate(shell, command, "csb", &mut std::io::stdout());
    Ok(())
}
