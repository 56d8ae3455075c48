//! Output rendering for the `csb` binary.
//!
//! Commands hand their payload to [`render`] or [`render_mode`] together
//! with the [`OutputMode`] resolved once in `main`; failures go through
//! [`render_error`] so machine consumers get the same structure on stderr
//! that stdout payloads have.
//!
//! Mode selection, highest precedence first: the `--format` flag (or the
//! `--json` shorthand), the `FORMAT` environment variable, `[output] format`
//! from `csbal.toml`, `output` from the user config, and finally a TTY
//! check: pretty on terminals, text on pipes.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

use csbal_core::CsbalError;

const RULE_WIDTH: usize = 72;

/// How command payloads are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Sectioned tables for interactive terminals.
    Pretty,
    /// Compact line-oriented text for pipes and scripts.
    Text,
    /// Stable JSON for machine consumers.
    Json,
}

fn mode_from_name(value: &str) -> Option<OutputMode> {
    match value.to_ascii_lowercase().as_str() {
        "pretty" => Some(OutputMode::Pretty),
        "text" => Some(OutputMode::Text),
        "json" => Some(OutputMode::Json),
        _ => None,
    }
}

/// Pick the output mode for this invocation.
///
/// Flags beat the `FORMAT` environment variable, which beats the project
/// config, which beats the user config. With none of them set, a terminal
/// gets `Pretty` and anything else gets `Text`. Unrecognized mode names are
/// skipped, not rejected.
pub fn resolve_output_mode(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    project_format: Option<&str>,
    user_format: Option<&str>,
) -> OutputMode {
    let format_env = std::env::var("FORMAT").ok();
    pick_mode(
        format_flag,
        json_flag,
        format_env.as_deref(),
        project_format,
        user_format,
        io::stdout().is_terminal(),
    )
}

fn pick_mode(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    project_format: Option<&str>,
    user_format: Option<&str>,
    stdout_is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }
    if json_flag {
        return OutputMode::Json;
    }

    let named = [format_env, project_format, user_format]
        .into_iter()
        .flatten()
        .find_map(mode_from_name);

    match named {
        Some(mode) => mode,
        None if stdout_is_tty => OutputMode::Pretty,
        None => OutputMode::Text,
    }
}

/// A command failure in renderable form: message, optional hint, stable code.
#[derive(Debug, Serialize)]
pub struct CliError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl From<&CsbalError> for CliError {
    fn from(err: &CsbalError) -> Self {
        // Transparent variants surface only the top-level message; append
        // the source chain so the file-level cause stays visible.
        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        Self {
            message,
            suggestion: Some(err.suggestion()),
            error_code: Some(err.error_code().to_string()),
        }
    }
}

fn emit_json<T: Serialize>(value: &T, out: &mut dyn Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write one payload to stdout, machine or human form.
///
/// `human_fn` serves both `Pretty` and `Text`; commands whose two human
/// forms differ use [`render_mode`] instead.
pub fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    human_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if mode == OutputMode::Json {
        return emit_json(value, &mut out);
    }
    human_fn(value, &mut out)?;
    Ok(())
}

/// Write one payload to stdout with distinct text and pretty renderers.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => emit_json(value, &mut out)?,
        OutputMode::Text => text_fn(value, &mut out)?,
        OutputMode::Pretty => pretty_fn(value, &mut out)?,
    }
    Ok(())
}

/// Write a structured error to stderr.
///
/// JSON consumers get `{"error": {...}}` so stderr parses the same way a
/// stdout payload does; humans get an `error:` line plus the suggestion.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    if mode == OutputMode::Json {
        return emit_json(&serde_json::json!({ "error": error }), &mut out);
    }
    writeln!(out, "error: {}", error.message)?;
    if let Some(ref suggestion) = error.suggestion {
        writeln!(out, "  suggestion: {suggestion}")?;
    }
    Ok(())
}

/// Horizontal rule for pretty sections.
pub fn write_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{}", "-".repeat(RULE_WIDTH))
}

/// Section heading with an underline rule.
pub fn write_section(w: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(w, "{title}")?;
    write_rule(w)
}

/// Aligned `key: value` detail line.
pub fn write_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    let label = format!("{key}:");
    writeln!(w, "{label:<12} {}", value.as_ref())
}
