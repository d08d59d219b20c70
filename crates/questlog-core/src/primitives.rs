//! # Primitives Module
//!
//! Shared constants for the progression rules.

/// XP threshold for the first level-up.
pub const BASE_XP_THRESHOLD: u64 = 100;

/// Smallest attribute gain a level-up can roll.
pub const MIN_ATTRIBUTE_GAIN: i64 = 1;

/// Largest attribute gain a level-up can roll.
pub const MAX_ATTRIBUTE_GAIN: i64 = 5;
