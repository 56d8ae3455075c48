//! Opt-in wall-clock ledger for CLI operations.
//!
//! Recording is off unless `--timing` or `CSBAL_TIMING` switches it on; the
//! `csb` binary wraps each command in [`timed`] and prints the digest to
//! stderr once the command finishes, keeping stdout clean for payloads.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use serde_json::json;

/// Percentile digest of every operation recorded on this thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingDigest {
    pub operations: Vec<OpStats>,
}

/// Latency percentiles for one named operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpStats {
    pub op: String,
    pub samples: usize,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

thread_local! {
    static LEDGER: RefCell<Vec<(String, Duration)>> = const { RefCell::new(Vec::new()) };
}

static RECORDING: AtomicBool = AtomicBool::new(false);

/// Returns true when `CSBAL_TIMING` asks for timing collection.
///
/// Truthy spellings: `1`, `true`, `yes`, `on` (any case).
#[must_use]
pub fn enabled_by_env() -> bool {
    std::env::var("CSBAL_TIMING").is_ok_and(|value| is_truthy(&value))
}

/// Switch sample recording on or off. Switching off drops pending samples.
pub fn set_recording(enabled: bool) {
    RECORDING.store(enabled, Ordering::Relaxed);
    if !enabled {
        clear_ledger();
    }
}

/// Returns true while samples are being recorded.
#[must_use]
pub fn is_recording() -> bool {
    RECORDING.load(Ordering::Relaxed)
}

/// Drops every sample recorded on the current thread.
pub fn clear_ledger() {
    LEDGER.with(|ledger| ledger.borrow_mut().clear());
}

/// Run `f`, recording its wall-clock duration under `op` when enabled.
pub fn timed<R>(op: &str, f: impl FnOnce() -> R) -> R {
    if !is_recording() {
        return f();
    }

    let started = Instant::now();
    let result = f();
    let elapsed = started.elapsed();
    LEDGER.with(|ledger| ledger.borrow_mut().push((op.to_string(), elapsed)));
    result
}

/// Drain the current thread's ledger into a percentile digest.
#[must_use]
pub fn digest() -> TimingDigest {
    let mut grouped: BTreeMap<String, Vec<Duration>> = BTreeMap::new();
    for (op, elapsed) in LEDGER.with(|ledger| std::mem::take(&mut *ledger.borrow_mut())) {
        grouped.entry(op).or_default().push(elapsed);
    }

    let operations = grouped
        .into_iter()
        .map(|(op, mut samples)| {
            samples.sort_unstable();
            OpStats {
                p50: percentile(&samples, 50),
                p95: percentile(&samples, 95),
                p99: percentile(&samples, 99),
                samples: samples.len(),
                op,
            }
        })
        .collect();

    TimingDigest { operations }
}

impl TimingDigest {
    /// Returns true when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// JSON form of the digest, with integer microsecond fields.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let operations: Vec<_> = self
            .operations
            .iter()
            .map(|op| {
                json!({
                    "op": op.op,
                    "samples": op.samples,
                    "p50_us": op.p50.as_micros(),
                    "p95_us": op.p95.as_micros(),
                    "p99_us": op.p99.as_micros(),
                })
            })
            .collect();

        json!({ "operations": operations })
    }

    /// Fixed-width table form of the digest for terminal output.
    #[must_use]
    pub fn render_table(&self) -> String {
        let mut out = format!(
            "{:<24} {:>7} {:>9} {:>9} {:>9}\n",
            "operation", "samples", "p50", "p95", "p99"
        );
        out.push_str(&"-".repeat(62));
        out.push('\n');

        for op in &self.operations {
            out.push_str(&format!(
                "{:<24} {:>7} {:>9} {:>9} {:>9}\n",
                op.op,
                op.samples,
                format_duration(op.p50),
                format_duration(op.p95),
                format_duration(op.p99)
            ));
        }

        out
    }
}

// Nearest-rank percentile over an already-sorted sample list.
fn percentile(sorted: &[Duration], pct: usize) -> Duration {
    match sorted.len() {
        0 => Duration::ZERO,
        n => {
            let rank = pct.min(100).saturating_mul(n).div_ceil(100);
            sorted[rank.saturating_sub(1).min(n - 1)]
        }
    }
}

fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros >= 1_000_000 {
        format!("{:.3}s", duration.as_secs_f64())
    } else if micros >= 1_000 {
        format!("{:.3}ms", duration.as_secs_f64() * 1e3)
    } else {
        format!("{micros}µs")
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
