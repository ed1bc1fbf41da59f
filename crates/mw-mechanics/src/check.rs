//! Threshold checks: roll a die and classify the result.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::die::Die;

/// The result of a resolution roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The die that was rolled.
    pub die: Die,
    /// The value rolled (1 to `die.sides()`).
    pub value: u32,
    /// The success threshold, if one applied.
    pub threshold: Option<u32>,
    /// Whether the roll succeeded. Always true when no threshold applies.
    pub success: bool,
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.threshold {
            Some(t) => write!(
                f,
                "{} = {} vs {} ({})",
                self.die,
                self.value,
                t,
                if self.success { "success" } else { "failure" }
            ),
            None => write!(f, "{} = {}", self.die, self.value),
        }
    }
}

/// Roll a die and compare against an optional threshold.
///
/// With no threshold the roll always counts as a success; otherwise it
/// succeeds when the value is at or above the threshold. Each call draws
/// independently from the given RNG.
pub fn check(die: Die, threshold: Option<u32>, rng: &mut impl Rng) -> RollOutcome {
    let value = die.roll(rng);
    let success = threshold.is_none_or(|t| value >= t);
    RollOutcome {
        die,
        value,
        threshold,
        success,
    }
}
