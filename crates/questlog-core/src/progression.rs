//! # Progression Engine
//!
//! XP awards and the level-up rules.
//!
//! XP accumulates toward a threshold. Crossing it increments the
//! level, carries the remainder over (partial progress is never
//! discarded), grows the threshold by half with integer floor, and
//! rolls an independent [1, 5] gain for each attribute. A single large
//! award may cross several thresholds; the loop runs until the
//! carry-over sits below the threshold again.

use serde::{Deserialize, Serialize};

use crate::character::{Attribute, Attributes, Character};
use crate::error::CoreError;
use crate::primitives::{MAX_ATTRIBUTE_GAIN, MIN_ATTRIBUTE_GAIN};
use crate::roller::GrowthRoller;

// =============================================================================
// OUTCOME TYPES
// =============================================================================

/// One level-up event inside an award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    /// The level reached by this event.
    pub level: u32,

    /// The threshold in force after this event.
    pub new_threshold: u64,

    /// Attribute gains rolled for this event. Each gain is in [1, 5].
    pub gains: Attributes,
}

/// The report returned by a completed XP award.
///
/// Callers render user-facing feedback from this report instead of
/// re-deriving it from character state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardOutcome {
    /// XP added by this award.
    pub awarded: u64,

    /// Level-up events in order. Empty when no threshold was crossed.
    pub level_ups: Vec<LevelUp>,
}

impl AwardOutcome {
    /// Whether the award crossed at least one threshold.
    #[must_use]
    pub fn leveled_up(&self) -> bool {
        !self.level_ups.is_empty()
    }

    /// Number of levels gained by the award.
    #[must_use]
    pub fn levels_gained(&self) -> u32 {
        self.level_ups.len() as u32
    }
}

// =============================================================================
// AWARD ALGORITHM
// =============================================================================

/// The threshold for the next level: floor(threshold * 1.5), computed
/// with integer arithmetic only.
#[must_use]
pub fn next_threshold(threshold: u64) -> u64 {
    threshold.saturating_add(threshold / 2)
}

/// Award XP to a character.
///
/// Rejects zero awards: a zero amount is always a caller bug, never a
/// progression event. On success the character satisfies
/// `current_xp < xp_to_next_level`.
pub fn award_xp(
    character: &mut Character,
    amount: u64,
    roller: &mut dyn GrowthRoller,
) -> Result<AwardOutcome, CoreError> {
    if amount == 0 {
        return Err(CoreError::ZeroXpAward);
    }

    character.current_xp = character.current_xp.saturating_add(amount);

    let mut level_ups = Vec::new();
    // A zero threshold can never converge; stop instead of spinning.
    while character.xp_to_next_level > 0 && character.current_xp >= character.xp_to_next_level {
        character.current_xp -= character.xp_to_next_level;
        character.level = character.level.saturating_add(1);
        character.xp_to_next_level = next_threshold(character.xp_to_next_level);

        let mut gains = Attributes::default();
        for attribute in Attribute::ALL {
            let gain = roller.roll().clamp(MIN_ATTRIBUTE_GAIN, MAX_ATTRIBUTE_GAIN);
            gains.add(attribute, gain);
            character.attributes.add(attribute, gain);
        }

        level_ups.push(LevelUp {
            level: character.level,
            new_threshold: character.xp_to_next_level,
            gains,
        });
    }

    Ok(AwardOutcome {
        awarded: amount,
        level_ups,
    })
}

// =============================================================================
// TESTS
// =============================================================================
