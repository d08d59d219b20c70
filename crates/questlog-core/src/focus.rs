//! # Focus Sessions
//!
//! Timed work intervals that pay fixed XP on completion.
//!
//! The countdown itself lives with the caller; only the completion of
//! a work interval reaches the core, which prices it. Breaks pay
//! nothing.

use serde::{Deserialize, Serialize};

/// Break length after a completed work interval, in seconds.
pub const BREAK_SECS: u64 = 300;

/// Focus session kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusKind {
    /// Full pomodoro, 25 minutes.
    Pomodoro,
    /// Short sprint, 5 minutes.
    Short,
    /// Long sprint, 15 minutes.
    Long,
}

impl FocusKind {
    /// All kinds in descending duration order.
    pub const ALL: [Self; 3] = [Self::Pomodoro, Self::Long, Self::Short];

    /// Work interval length in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> u64 {
        match self {
            Self::Pomodoro => 1500,
            Self::Short => 300,
            Self::Long => 900,
        }
    }

    /// XP paid when the interval completes.
    #[must_use]
    pub fn xp_reward(&self) -> u64 {
        match self {
            Self::Pomodoro => 50,
            Self::Short => 10,
            Self::Long => 25,
        }
    }

    /// Parse a lowercase kind name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "pomodoro" => Some(Self::Pomodoro),
            "short" => Some(Self::Short),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    /// The canonical lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pomodoro => "pomodoro",
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

impl std::fmt::Display for FocusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewards_scale_with_duration() {
        assert_eq!(FocusKind::Pomodoro.xp_reward(), 50);
        assert_eq!(FocusKind::Long.xp_reward(), 25);
        assert_eq!(FocusKind::Short.xp_reward(), 10);
        assert!(FocusKind::Pomodoro.duration_secs() > FocusKind::Long.duration_secs());
        assert!(FocusKind::Long.duration_secs() > FocusKind::Short.duration_secs());
    }

    #[test]
    fn parse_roundtrip() {
        for kind in FocusKind::ALL {
            assert_eq!(FocusKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(FocusKind::parse("marathon"), None);
    }
}
