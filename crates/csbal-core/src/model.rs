use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier for a customer-success agent.
///
/// `0` is reserved as the "no winner" sentinel and never names a real
/// agent. Uniqueness is a caller convention, not validated here.
pub type AgentId = u32;

/// A customer-success agent with a capacity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub score: i32,
}

impl Agent {
    #[must_use]
    pub const fn new(id: AgentId, score: i32) -> Self {
        Self { id, score }
    }
}

/// A customer with a demand score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub score: i32,
}

impl Customer {
    #[must_use]
    pub const fn new(id: u32, score: i32) -> Self {
        Self { id, score }
    }
}

/// How the engine locates the cheapest sufficient agent for a customer.
///
/// Both strategies are observably identical on every input: `Scan` is the
/// reference linear walk over the sorted agents, `LowerBound` is a
/// partition-point search over the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    Scan,
    LowerBound,
}

impl Default for SearchStrategy {
    fn default() -> Self {
        Self::LowerBound
    }
}

impl SearchStrategy {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::LowerBound => "lower-bound",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a name that matches no known enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: '{}'", self.expected, self.got)
    }
}

impl std::error::Error for ParseEnumError {}

fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

impl FromStr for SearchStrategy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "scan" => Ok(Self::Scan),
            "lower-bound" | "lower_bound" => Ok(Self::LowerBound),
            _ => Err(ParseEnumError {
                expected: "strategy",
                got: s.to_string(),
            }),
        }
    }
}
