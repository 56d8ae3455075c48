//! Winner reduction over per-agent tallies.
//!
//! The scan keeps a running maximum that starts at zero and clears the
//! winner on every tie with that maximum, so an id survives only when
//! exactly one agent holds a strict maximum. Because the maximum starts at
//! zero, the first agent scanned always ties it when its tally is zero and
//! clears the winner; a roster where nobody serves anyone yields `0`, never
//! an arbitrary agent id.

use csbal_core::AgentId;

/// Reduce `(agent id, tally)` pairs to the winning id, or `0` when the
/// maximum tally is shared.
///
/// Pairs must arrive in the engine's ascending-score scan order. Duplicate
/// ids arrive once per roster occurrence, each carrying the shared bucket's
/// count, so the second occurrence ties the first and clears it.
#[must_use]
pub fn reduce_winner(tallies: impl IntoIterator<Item = (AgentId, u32)>) -> AgentId {
    let mut max_count = 0u32;
    let mut winner = 0;

    for (id, count) in tallies {
        if count == max_count {
            winner = 0;
        } else if count > max_count {
            max_count = count;
            winner = id;
        }
    }

    winner
}

#[cfg(test)]
mod tests {
    use super::reduce_winner;

    #[test]
    fn empty_input_returns_zero() {
        assert_eq!(reduce_winner([]), 0);
    }

    #[test]
    fn all_zero_tallies_return_zero() {
        assert_eq!(reduce_winner([(1, 0), (2, 0), (3, 0)]), 0);
    }

    #[test]
    fn single_agent_with_zero_tally_ties_the_initial_max() {
        // The running max starts at zero, so a lone unproductive agent is
        // cleared rather than winning by default.
        assert_eq!(reduce_winner([(9, 0)]), 0);
    }

    #[test]
    fn single_strict_max_wins() {
        assert_eq!(reduce_winner([(1, 3), (2, 0)]), 1);
        assert_eq!(reduce_winner([(1, 0), (2, 3)]), 2);
        assert_eq!(reduce_winner([(1, 0), (2, 0), (3, 5)]), 3);
    }

    #[test]
    fn leading_strict_max_survives_smaller_tallies() {
        assert_eq!(reduce_winner([(1, 5), (2, 0), (3, 0)]), 1);
        assert_eq!(reduce_winner([(4, 7), (5, 6), (6, 1)]), 4);
    }

    #[test]
    fn tie_at_max_clears_winner() {
        assert_eq!(reduce_winner([(1, 3), (2, 3)]), 0);
        assert_eq!(reduce_winner([(1, 2), (2, 3), (3, 3)]), 0);
    }

    #[test]
    fn later_strict_max_recovers_after_tie() {
        // 4,4 clears the winner, then 6 takes a strict maximum.
        assert_eq!(reduce_winner([(1, 4), (2, 4), (3, 6)]), 3);
    }

    #[test]
    fn tie_with_earlier_max_clears_even_at_scan_end() {
        assert_eq!(reduce_winner([(1, 2), (2, 4), (3, 4)]), 0);
    }

    #[test]
    fn duplicate_id_occurrences_tie_their_shared_bucket() {
        // Two roster occurrences of id 7 both report the shared count.
        assert_eq!(reduce_winner([(7, 1), (7, 1)]), 0);
    }
}
