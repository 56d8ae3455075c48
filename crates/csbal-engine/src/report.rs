use csbal_core::{AgentId, SearchStrategy};
use serde::Serialize;

/// Per-agent outcome row, in the engine's ascending-score scan order.
///
/// With duplicate agent ids each roster occurrence gets its own row, all
/// showing the shared tally bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentTally {
    pub id: AgentId,
    pub score: i32,
    pub assigned: u32,
}

/// Everything one balancing run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    /// Winning agent id, or `0` when no agent holds a strict maximum.
    pub winner: AgentId,
    /// One row per available agent, ascending by score.
    pub tallies: Vec<AgentTally>,
    /// Customers that were assigned to some agent.
    pub assigned: usize,
    /// Customers no available agent could serve.
    pub unassigned: usize,
    /// Agents excluded by the unavailability set.
    pub away: usize,
    pub strategy: SearchStrategy,
}

impl BalanceReport {
    /// The winner as an optional id, `None` when the scan cleared it.
    #[must_use]
    pub const fn winner_id(&self) -> Option<AgentId> {
        match self.winner {
            0 => None,
            id => Some(id),
        }
    }
}
