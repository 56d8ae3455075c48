//! Threshold assignment and winner tallying across a roster of agents.
//!
//! # Algorithm
//!
//! 1. Drop agents whose id is in the unavailability set. Nobody left means
//!    the winner is `0`.
//! 2. Stable-sort the rest ascending by capacity score; equal-score agents
//!    keep their input-relative order.
//! 3. For each customer in input order, assign it to the first agent in
//!    that sorted order whose capacity meets or exceeds the customer's
//!    demand. Customers nobody can serve stay unassigned.
//! 4. Reduce the per-agent tallies to a winner (see [`crate::winner`]):
//!    an id is returned only when exactly one agent holds a strict maximum.
//!
//! Tallies are keyed by agent id, so duplicate ids collapse into a shared
//! bucket and the winner reduction sees that bucket once per occurrence.
//! The outcome stays deterministic; uniqueness of ids is the caller's
//! convention.

use std::collections::{HashMap, HashSet};

use csbal_core::{Agent, AgentId, Customer, SearchStrategy};
use tracing::debug;

use crate::report::{AgentTally, BalanceReport};
use crate::winner::reduce_winner;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Configuration for a balancing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// How the per-customer lookup walks the sorted roster.
    pub strategy: SearchStrategy,
}

// ---------------------------------------------------------------------------
// Core balancing functions
// ---------------------------------------------------------------------------

/// Balance customers across available agents and return the winning agent
/// id, or `0` when no single agent serves strictly the most customers.
///
/// Total over all inputs: empty slices, negative scores, and unknown ids in
/// `unavailable` are ordinary cases, not errors. Inputs are borrowed
/// immutably and never reordered.
#[must_use]
pub fn compute(agents: &[Agent], customers: &[Customer], unavailable: &[AgentId]) -> AgentId {
    balance(agents, customers, unavailable).winner
}

/// Like [`compute`] but returns the full per-agent [`BalanceReport`].
#[must_use]
pub fn balance(agents: &[Agent], customers: &[Customer], unavailable: &[AgentId]) -> BalanceReport {
    balance_with_config(agents, customers, unavailable, &EngineConfig::default())
}

/// Like [`balance`] but accepts an explicit [`EngineConfig`].
#[must_use]
pub fn balance_with_config(
    agents: &[Agent],
    customers: &[Customer],
    unavailable: &[AgentId],
    config: &EngineConfig,
) -> BalanceReport {
    let away: HashSet<AgentId> = unavailable.iter().copied().collect();

    let mut available: Vec<Agent> = agents
        .iter()
        .filter(|agent| !away.contains(&agent.id))
        .copied()
        .collect();
    let away_count = agents.len() - available.len();

    if available.is_empty() {
        return BalanceReport {
            winner: 0,
            tallies: Vec::new(),
            assigned: 0,
            unassigned: customers.len(),
            away: away_count,
            strategy: config.strategy,
        };
    }

    // Stable sort: equal-score agents keep input order, which fixes which
    // of them absorbs customers at a shared threshold.
    available.sort_by_key(|agent| agent.score);

    let mut counts: HashMap<AgentId, u32> =
        available.iter().map(|agent| (agent.id, 0)).collect();

    let mut assigned = 0usize;
    for customer in customers {
        let Some(agent_id) = first_sufficient(&available, customer.score, config.strategy) else {
            continue;
        };
        if let Some(count) = counts.get_mut(&agent_id) {
            *count += 1;
        }
        assigned += 1;
    }

    let winner = reduce_winner(
        available
            .iter()
            .map(|agent| (agent.id, counts.get(&agent.id).copied().unwrap_or(0))),
    );

    let tallies: Vec<AgentTally> = available
        .iter()
        .map(|agent| AgentTally {
            id: agent.id,
            score: agent.score,
            assigned: counts.get(&agent.id).copied().unwrap_or(0),
        })
        .collect();

    debug!(
        agents = agents.len(),
        away = away_count,
        customers = customers.len(),
        assigned,
        winner,
        "balance complete"
    );

    BalanceReport {
        winner,
        tallies,
        assigned,
        unassigned: customers.len() - assigned,
        away: away_count,
        strategy: config.strategy,
    }
}

// ---------------------------------------------------------------------------
// Agent lookup
// ---------------------------------------------------------------------------

/// Id of the first agent in ascending-score order able to serve `demand`.
///
/// The slice is partitioned by `score < demand`, so the partition point is
/// exactly the index the linear scan stops at; the two strategies cannot
/// disagree.
fn first_sufficient(sorted: &[Agent], demand: i32, strategy: SearchStrategy) -> Option<AgentId> {
    match strategy {
        SearchStrategy::Scan => sorted
            .iter()
            .find(|agent| agent.score >= demand)
            .map(|agent| agent.id),
        SearchStrategy::LowerBound => {
            let idx = sorted.partition_point(|agent| agent.score < demand);
            sorted.get(idx).map(|agent| agent.id)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
