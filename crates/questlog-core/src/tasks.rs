//! # Task Store
//!
//! Task records and their CRUD lifecycle.
//!
//! Tasks are the primary XP source: completing one pays its
//! difficulty's fixed yield through the session. The store itself
//! knows nothing about XP; it only tracks records.
//!
//! Dates are logical day offsets relative to session start, not wall
//! clock. The core never reads a clock.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// IDENTIFIERS AND ENUMS
// =============================================================================

/// Task identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task difficulty tier. Each tier has a fixed XP yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Epic,
}

impl Difficulty {
    /// All tiers in ascending order.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Epic];

    /// Fixed XP yield for completing a task of this tier.
    #[must_use]
    pub fn xp_reward(&self) -> u64 {
        match self {
            Self::Easy => 10,
            Self::Medium => 25,
            Self::Hard => 50,
            Self::Epic => 100,
        }
    }

    /// Star rating shown for this tier (1-4).
    #[must_use]
    pub fn stars(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Epic => 4,
        }
    }

    /// Parse a lowercase tier name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            "epic" => Some(Self::Epic),
            _ => None,
        }
    }

    /// The canonical lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Epic => "epic",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Study,
    Health,
    Fitness,
    #[default]
    Other,
}

impl Category {
    /// Parse a lowercase category name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "work" => Some(Self::Work),
            "study" => Some(Self::Study),
            "health" => Some(Self::Health),
            "fitness" => Some(Self::Fitness),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// The canonical lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Study => "study",
            Self::Health => "health",
            Self::Fitness => "fitness",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recurrence frequency for repeating tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
}

// =============================================================================
// TASK RECORD
// =============================================================================

/// A task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub recurrence: Option<Recurrence>,
    pub completed: bool,

    /// Logical day the task was created, relative to session start.
    pub created_day: i64,

    /// Logical day the task is due, if any.
    pub due_day: Option<i64>,
}

/// Fields for creating a task. The store assigns the id and stamps
/// the creation day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
    #[serde(default)]
    pub due_day: Option<i64>,
}

/// Partial task update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
    #[serde(default)]
    pub due_day: Option<i64>,
}

// =============================================================================
// TASK STORE
// =============================================================================

/// The task store.
///
/// Keyed by `BTreeMap` so listing order is deterministic (ascending
/// id, which is creation order).
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: BTreeMap<TaskId, Task>,
    next_task_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_task_id: 1,
        }
    }

    /// Insert a new task stamped with the given logical day.
    pub fn add(&mut self, draft: TaskDraft, created_day: i64) -> TaskId {
        let id = TaskId(self.next_task_id);
        self.next_task_id = self.next_task_id.saturating_add(1);

        self.tasks.insert(
            id,
            Task {
                id,
                title: draft.title,
                description: draft.description,
                difficulty: draft.difficulty,
                category: draft.category,
                recurrence: draft.recurrence,
                completed: false,
                created_day,
                due_day: draft.due_day,
            },
        );

        id
    }

    /// Lookup a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Apply a partial update. Returns false for unknown ids.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> bool {
        let Some(task) = self.tasks.get_mut(&id) else {
            return false;
        };

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(difficulty) = patch.difficulty {
            task.difficulty = difficulty;
        }
        if let Some(category) = patch.category {
            task.category = category;
        }
        if let Some(recurrence) = patch.recurrence {
            task.recurrence = Some(recurrence);
        }
        if let Some(due_day) = patch.due_day {
            task.due_day = Some(due_day);
        }

        true
    }

    /// Remove a task, returning the record if it existed.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.tasks.remove(&id)
    }

    /// Flip a task's completion state. Returns the new state, or
    /// `None` for unknown ids.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.get_mut(&id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// All tasks in deterministic id order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.values().filter(|t| t.completed).count()
    }
}

// =============================================================================
// TESTS
// =============================================================================
