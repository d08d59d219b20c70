//! # Questlog Core
//!
//! The deterministic progression engine and its collaborators.
//!
//! This crate is pure Rust: no async, no network, no file I/O, and no
//! wall clock. All keyed collections are `BTreeMap` so iteration order
//! is deterministic, all arithmetic is integral, and randomness enters
//! through exactly one trait seam ([`GrowthRoller`]).
//!
//! The module map:
//! - [`character`]: the character record and attribute block
//! - [`progression`]: XP awards and the level-up rules
//! - [`roller`]: the randomness seam for attribute growth
//! - [`tasks`]: task records and CRUD
//! - [`quests`]: daily quests with XP bounties
//! - [`focus`]: focus-session rewards
//! - [`session`]: the single authoritative owner of one session
//! - [`seed`]: the fixed records a fresh session starts from

pub mod character;
pub mod error;
pub mod focus;
pub mod primitives;
pub mod progression;
pub mod quests;
pub mod roller;
pub mod seed;
pub mod session;
pub mod tasks;

pub use character::{Attribute, Attributes, Character};
pub use error::CoreError;
pub use focus::FocusKind;
pub use progression::{AwardOutcome, LevelUp, award_xp, next_threshold};
pub use quests::{Quest, QuestDraft, QuestId, QuestLog};
pub use roller::{GrowthRoller, RngRoller, ScriptRoller};
pub use session::{Session, TaskToggle};
pub use tasks::{Category, Difficulty, Recurrence, Task, TaskDraft, TaskId, TaskPatch, TaskStore};
