//! Deterministic input builders shared by unit tests, integration tests,
//! and benches.
//!
//! Ids always run sequentially from 1 in input order, so expected winners
//! can be named by position in the score list.

use csbal_core::{Agent, Customer};

/// Agents from capacity scores, ids `1..=len` in input order.
#[must_use]
pub fn agents_from_scores(scores: &[i32]) -> Vec<Agent> {
    (1u32..)
        .zip(scores.iter().copied())
        .map(|(id, score)| Agent::new(id, score))
        .collect()
}

/// Customers from demand scores, ids `1..=len` in input order.
#[must_use]
pub fn customers_from_scores(scores: &[i32]) -> Vec<Customer> {
    (1u32..)
        .zip(scores.iter().copied())
        .map(|(id, score)| Customer::new(id, score))
        .collect()
}

/// `count` agents sharing one capacity score, ids `1..=count`.
#[must_use]
pub fn uniform_agents(count: usize, score: i32) -> Vec<Agent> {
    (1u32..)
        .take(count)
        .map(|id| Agent::new(id, score))
        .collect()
}

/// `count` customers sharing one demand score, ids `1..=count`.
#[must_use]
pub fn uniform_customers(count: usize, score: i32) -> Vec<Customer> {
    (1u32..)
        .take(count)
        .map(|id| Customer::new(id, score))
        .collect()
}

/// Arithmetic score sequence: `count` values starting at `start`, step 1.
#[must_use]
pub fn score_sequence(count: usize, start: i32) -> Vec<i32> {
    let mut scores = Vec::with_capacity(count);
    let mut next = start;
    for _ in 0..count {
        scores.push(next);
        next = next.wrapping_add(1);
    }
    scores
}
