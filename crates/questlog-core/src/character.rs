//! # Character Module
//!
//! The character record and its attribute block.
//!
//! The character is a singleton per session: created once from seed
//! values, mutated only through the progression engine and the raw
//! attribute adjustment path, and discarded when the session ends.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::primitives::BASE_XP_THRESHOLD;

// =============================================================================
// ATTRIBUTES
// =============================================================================

/// The four character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Strength,
    Intelligence,
    Discipline,
    Health,
}

impl Attribute {
    /// All attributes in canonical order.
    pub const ALL: [Self; 4] = [
        Self::Strength,
        Self::Intelligence,
        Self::Discipline,
        Self::Health,
    ];

    /// Parse a lowercase attribute name. Returns `None` for anything
    /// that is not one of the four recognized names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "strength" => Some(Self::Strength),
            "intelligence" => Some(Self::Intelligence),
            "discipline" => Some(Self::Discipline),
            "health" => Some(Self::Health),
            _ => None,
        }
    }

    /// The canonical lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Intelligence => "intelligence",
            Self::Discipline => "discipline",
            Self::Health => "health",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The attribute block: one integer per attribute.
///
/// No floor or ceiling is enforced here. The raw adjustment path may
/// drive a value negative; only level-up gains are guaranteed positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i64,
    pub intelligence: i64,
    pub discipline: i64,
    pub health: i64,
}

impl Attributes {
    /// Create an attribute block with explicit values.
    #[must_use]
    pub fn new(strength: i64, intelligence: i64, discipline: i64, health: i64) -> Self {
        Self {
            strength,
            intelligence,
            discipline,
            health,
        }
    }

    /// Read one attribute.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> i64 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Intelligence => self.intelligence,
            Attribute::Discipline => self.discipline,
            Attribute::Health => self.health,
        }
    }

    /// Add a delta to one attribute using saturating arithmetic.
    pub fn add(&mut self, attribute: Attribute, delta: i64) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Discipline => &mut self.discipline,
            Attribute::Health => &mut self.health,
        };
        *slot = slot.saturating_add(delta);
    }

    /// Sum of all four attributes.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.strength
            .saturating_add(self.intelligence)
            .saturating_add(self.discipline)
            .saturating_add(self.health)
    }
}

// =============================================================================
// CHARACTER
// =============================================================================

/// The character record.
///
/// Invariants maintained by the mutation paths:
/// - `title` is always a member of `titles`.
/// - `current_xp < xp_to_next_level` after any completed award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,

    /// Current level, starts at 1.
    pub level: u32,

    /// XP accumulated toward the next level.
    pub current_xp: u64,

    /// XP threshold for the current level.
    pub xp_to_next_level: u64,

    /// Active display title, always drawn from `titles`.
    pub title: String,

    /// Titles the character owns.
    pub titles: BTreeSet<String>,

    /// Consecutive active days. The progression engine never touches it.
    pub streak: u32,

    /// The four attributes.
    pub attributes: Attributes,
}

impl Character {
    /// Create a fresh level-1 character.
    ///
    /// The starting title is inserted into the owned set so the
    /// active-title invariant holds from the first instant.
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>, attributes: Attributes) -> Self {
        let title = title.into();
        let mut titles = BTreeSet::new();
        titles.insert(title.clone());
        Self {
            name: name.into(),
            level: 1,
            current_xp: 0,
            xp_to_next_level: BASE_XP_THRESHOLD,
            title,
            titles,
            streak: 0,
            attributes,
        }
    }

    /// Add a title to the owned set. Returns false if already owned.
    pub fn grant_title(&mut self, title: impl Into<String>) -> bool {
        self.titles.insert(title.into())
    }

    /// Switch the active title.
    ///
    /// No-op unless the title is a member of the owned set. Returns
    /// whether the title was applied.
    pub fn set_title(&mut self, title: &str) -> bool {
        if self.titles.contains(title) {
            self.title = title.to_string();
            true
        } else {
            false
        }
    }

    /// Raw attribute adjustment, keyed by enum.
    ///
    /// Saturating and unclamped: a negative delta may drive the value
    /// below zero.
    pub fn adjust_attribute(&mut self, attribute: Attribute, delta: i64) {
        self.attributes.add(attribute, delta);
    }

    /// Raw attribute adjustment, keyed by name.
    ///
    /// Unrecognized names are a silent no-op. Returns whether an
    /// attribute was touched.
    pub fn adjust_attribute_by_name(&mut self, name: &str, delta: i64) -> bool {
        match Attribute::parse(name) {
            Some(attribute) => {
                self.adjust_attribute(attribute, delta);
                true
            }
            None => false,
        }
    }

    /// Progress toward the next level as an integer percentage (0-100).
    #[must_use]
    pub fn xp_progress_percent(&self) -> u8 {
        if self.xp_to_next_level == 0 {
            return 100;
        }
        ((self.current_xp.saturating_mul(100) / self.xp_to_next_level).min(100)) as u8
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_character_starts_at_level_one() {
        let character = Character::new("Tester", "Novice", Attributes::default());
        assert_eq!(character.level, 1);
        assert_eq!(character.current_xp, 0);
        assert_eq!(character.xp_to_next_level, BASE_XP_THRESHOLD);
        assert_eq!(character.title, "Novice");
        assert!(character.titles.contains("Novice"));
    }

    #[test]
    fn set_title_requires_ownership() {
        let mut character = Character::new("Tester", "Novice", Attributes::default());

        assert!(!character.set_title("Task Master"));
        assert_eq!(character.title, "Novice");

        assert!(character.grant_title("Task Master"));
        assert!(character.set_title("Task Master"));
        assert_eq!(character.title, "Task Master");
    }

    #[test]
    fn grant_title_is_idempotent() {
        let mut character = Character::new("Tester", "Novice", Attributes::default());
        assert!(character.grant_title("Task Master"));
        assert!(!character.grant_title("Task Master"));
        assert_eq!(character.titles.len(), 2);
    }

    #[test]
    fn adjust_attribute_by_name_ignores_unknown() {
        let mut character = Character::new("Tester", "Novice", Attributes::new(10, 10, 10, 10));

        assert!(character.adjust_attribute_by_name("strength", 5));
        assert_eq!(character.attributes.strength, 15);

        assert!(!character.adjust_attribute_by_name("charisma", 5));
        assert_eq!(character.attributes.total(), 45);
    }

    #[test]
    fn adjust_attribute_allows_negative_values() {
        let mut character = Character::new("Tester", "Novice", Attributes::new(3, 3, 3, 3));
        character.adjust_attribute(Attribute::Health, -10);
        assert_eq!(character.attributes.health, -7);
    }

    #[test]
    fn attribute_parse_roundtrip() {
        for attribute in Attribute::ALL {
            assert_eq!(Attribute::parse(attribute.as_str()), Some(attribute));
        }
        assert_eq!(Attribute::parse("luck"), None);
    }

    #[test]
    fn xp_progress_percent_is_bounded() {
        let mut character = Character::new("Tester", "Novice", Attributes::default());
        character.current_xp = 75;
        assert_eq!(character.xp_progress_percent(), 75);

        character.current_xp = 0;
        assert_eq!(character.xp_progress_percent(), 0);

        character.xp_to_next_level = 150;
        character.current_xp = 75;
        assert_eq!(character.xp_progress_percent(), 50);
    }
}
