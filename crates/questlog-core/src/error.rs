//! # Error Module
//!
//! The core's typed error taxonomy.
//!
//! Invalid attribute names and non-owned titles are deliberately NOT
//! errors: those paths report a bool and stay silent, matching the
//! tolerant boundary the collaborators expect. Errors are reserved for
//! operations that reference a record that does not exist, or input
//! that can only be a caller bug.

use crate::quests::QuestId;
use crate::tasks::TaskId;
use thiserror::Error;

/// Errors produced by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// XP awards must be positive.
    #[error("xp award must be positive")]
    ZeroXpAward,

    /// No task with the given id.
    #[error("unknown task id {0}")]
    UnknownTask(TaskId),

    /// No quest with the given id.
    #[error("unknown quest id {0}")]
    UnknownQuest(QuestId),
}
