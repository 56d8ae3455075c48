use proptest::prelude::*;

use csbal_core::{Agent, AgentId, Customer, SearchStrategy};
use csbal_engine::{EngineConfig, balance_with_config, compute};

use generators::*;

/// Literal re-statement of the balancing rules, kept deliberately naive:
/// tuple lists, linear searches, an assoc-list tally. Any divergence from
/// the engine is a bug in one of them.
fn reference_winner(agents: &[Agent], customers: &[Customer], away: &[AgentId]) -> AgentId {
    let mut sorted: Vec<(i32, AgentId)> = agents
        .iter()
        .filter(|agent| !away.contains(&agent.id))
        .map(|agent| (agent.score, agent.id))
        .collect();
    if sorted.is_empty() {
        return 0;
    }
    sorted.sort_by_key(|&(score, _)| score);

    // One bucket per distinct id, duplicate roster entries share theirs.
    let mut counts: Vec<(AgentId, u32)> = Vec::new();
    for &(_, id) in &sorted {
        if !counts.iter().any(|&(key, _)| key == id) {
            counts.push((id, 0));
        }
    }

    for customer in customers {
        let hit = sorted.iter().find(|&&(score, _)| score >= customer.score);
        if let Some(&(_, id)) = hit {
            if let Some(entry) = counts.iter_mut().find(|(key, _)| *key == id) {
                entry.1 += 1;
            }
        }
    }

    let mut max_count = 0u32;
    let mut winner = 0;
    for &(_, id) in &sorted {
        let count = counts
            .iter()
            .find(|&&(key, _)| key == id)
            .map_or(0, |&(_, count)| count);
        if count == max_count {
            winner = 0;
        } else if count > max_count {
            max_count = count;
            winner = id;
        }
    }
    winner
}

proptest! {
    // Configure 10,000 cases for local dev (CI should override this via env vars or config)
    #![proptest_config(proptest::test_runner::Config::with_cases(10000))]

    #[test]
    fn winner_matches_the_reference_rules(
        agents in arb_agents(),
        customers in arb_customers(),
        away in arb_away(),
    ) {
        let expected = reference_winner(&agents, &customers, &away);
        prop_assert_eq!(compute(&agents, &customers, &away), expected);
    }

    #[test]
    fn winner_is_zero_or_an_available_agent(
        agents in arb_agents(),
        customers in arb_customers(),
        away in arb_away(),
    ) {
        let winner = compute(&agents, &customers, &away);
        if winner != 0 {
            prop_assert!(
                agents
                    .iter()
                    .any(|agent| agent.id == winner && !away.contains(&agent.id)),
                "winner {} must be an available roster id",
                winner
            );
        }
    }

    #[test]
    fn sending_every_agent_away_returns_zero(
        agents in arb_agents(),
        customers in arb_customers(),
    ) {
        let away: Vec<AgentId> = agents.iter().map(|agent| agent.id).collect();
        prop_assert_eq!(compute(&agents, &customers, &away), 0);
    }

    #[test]
    fn no_customers_means_no_winner(
        agents in arb_agents(),
        away in arb_away(),
    ) {
        prop_assert_eq!(compute(&agents, &[], &away), 0);
    }

    #[test]
    fn scan_and_lower_bound_agree(
        agents in arb_agents(),
        customers in arb_customers(),
        away in arb_away(),
    ) {
        let scan = balance_with_config(
            &agents,
            &customers,
            &away,
            &EngineConfig { strategy: SearchStrategy::Scan },
        );
        let lower = balance_with_config(
            &agents,
            &customers,
            &away,
            &EngineConfig { strategy: SearchStrategy::LowerBound },
        );

        prop_assert_eq!(scan.winner, lower.winner);
        prop_assert_eq!(scan.tallies, lower.tallies);
        prop_assert_eq!(scan.assigned, lower.assigned);
        prop_assert_eq!(scan.unassigned, lower.unassigned);
    }

    #[test]
    fn repeated_runs_are_identical_and_leave_inputs_alone(
        agents in arb_agents(),
        customers in arb_customers(),
        away in arb_away(),
    ) {
        let agents_before = agents.clone();
        let customers_before = customers.clone();

        let first = balance_with_config(
            &agents,
            &customers,
            &away,
            &EngineConfig::default(),
        );
        let second = balance_with_config(
            &agents,
            &customers,
            &away,
            &EngineConfig::default(),
        );

        prop_assert_eq!(first, second);
        prop_assert_eq!(agents, agents_before);
        prop_assert_eq!(customers, customers_before);
    }
}
