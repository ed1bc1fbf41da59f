//! Dice rolling and threshold resolution for Mythweaver.
//!
//! Offers the seven standard polyhedral dice and one resolution strategy:
//! roll once, succeed at or above an optional threshold. All rolls draw
//! from a caller-supplied RNG so sessions can be seeded for reproducible
//! play.

/// Threshold checks.
pub mod check;
/// Polyhedral die types.
pub mod die;

pub use check::{RollOutcome, check};
pub use die::Die;
