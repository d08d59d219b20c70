//! # Quest Log
//!
//! Daily quests with fixed XP bounties.
//!
//! Completion is manual and idempotent: a bounty pays at most once,
//! no matter how many times a quest is completed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CoreError;

/// Quest identifier, assigned by the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestId(pub u64);

impl std::fmt::Display for QuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub description: String,

    /// Progress toward the quest goal.
    pub progress: u32,

    /// Goal count for the quest.
    pub total: u32,

    /// XP bounty paid on first completion.
    pub xp: u64,

    pub completed: bool,
}

/// Fields for creating a quest. The log assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub progress: u32,
    pub total: u32,
    pub xp: u64,
}

// =============================================================================
// QUEST LOG
// =============================================================================

/// The quest log.
///
/// Keyed by `BTreeMap` so listing order is deterministic.
#[derive(Debug, Clone)]
pub struct QuestLog {
    quests: BTreeMap<QuestId, Quest>,
    next_quest_id: u64,
}

impl Default for QuestLog {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestLog {
    /// Create an empty log. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            quests: BTreeMap::new(),
            next_quest_id: 1,
        }
    }

    /// Insert a new quest. Seed progress is capped at the goal count.
    pub fn add(&mut self, draft: QuestDraft) -> QuestId {
        let id = QuestId(self.next_quest_id);
        self.next_quest_id = self.next_quest_id.saturating_add(1);

        self.quests.insert(
            id,
            Quest {
                id,
                title: draft.title,
                description: draft.description,
                progress: draft.progress.min(draft.total),
                total: draft.total,
                xp: draft.xp,
                completed: false,
            },
        );

        id
    }

    /// Lookup a quest by id.
    #[must_use]
    pub fn get(&self, id: QuestId) -> Option<&Quest> {
        self.quests.get(&id)
    }

    /// All quests in deterministic id order.
    pub fn quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.values()
    }

    /// Number of quests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Number of completed quests.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.quests.values().filter(|q| q.completed).count()
    }

    /// Share of quests completed as an integer percentage (0-100).
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.quests.is_empty() {
            return 0;
        }
        ((self.completed_count().saturating_mul(100)) / self.quests.len()) as u8
    }

    /// Mark a quest completed and take its bounty.
    ///
    /// Returns `Ok(Some(xp))` on first completion, `Ok(None)` if the
    /// quest was already completed, and an error for unknown ids.
    pub fn claim(&mut self, id: QuestId) -> Result<Option<u64>, CoreError> {
        let quest = self
            .quests
            .get_mut(&id)
            .ok_or(CoreError::UnknownQuest(id))?;

        if quest.completed {
            return Ok(None);
        }

        quest.completed = true;
        Ok(Some(quest.xp))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, xp: u64) -> QuestDraft {
        QuestDraft {
            title: title.to_string(),
            description: String::new(),
            progress: 0,
            total: 1,
            xp,
        }
    }

    #[test]
    fn claim_pays_once() {
        let mut log = QuestLog::new();
        let id = log.add(draft("quest", 50));

        assert_eq!(log.claim(id), Ok(Some(50)));
        assert_eq!(log.claim(id), Ok(None));
        assert_eq!(log.completed_count(), 1);
    }

    #[test]
    fn claim_unknown_quest_is_an_error() {
        let mut log = QuestLog::new();
        assert_eq!(log.claim(QuestId(9)), Err(CoreError::UnknownQuest(QuestId(9))));
    }

    #[test]
    fn seed_progress_is_capped_at_total() {
        let mut log = QuestLog::new();
        let id = log.add(QuestDraft {
            title: "capped".to_string(),
            description: String::new(),
            progress: 10,
            total: 3,
            xp: 20,
        });

        assert_eq!(log.get(id).map(|q| q.progress), Some(3));
    }

    #[test]
    fn progress_percent_counts_completions() {
        let mut log = QuestLog::new();
        assert_eq!(log.progress_percent(), 0);

        let first = log.add(draft("a", 10));
        log.add(draft("b", 10));
        assert_eq!(log.progress_percent(), 0);

        log.claim(first).expect("quest exists");
        assert_eq!(log.progress_percent(), 50);
    }
}
