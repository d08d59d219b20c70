//! # Seed Data
//!
//! The fixed records a fresh session starts from.
//!
//! Seed state is recreated on every load and nothing here survives the
//! session; there is no durable store behind it.

use crate::character::{Attributes, Character};
use crate::quests::{QuestDraft, QuestLog};
use crate::tasks::{Category, Difficulty, Recurrence, TaskDraft, TaskStore};

/// The seed character: level 1, partway toward the first level-up.
#[must_use]
pub fn character() -> Character {
    let mut character = Character::new(
        "Shadow Monarch",
        "Novice Hunter",
        Attributes::new(42, 65, 58, 37),
    );
    character.current_xp = 75;
    character.streak = 7;
    character.grant_title("Task Master");
    character.grant_title("Early Riser");
    character
}

/// Populate the seed tasks and quests.
pub fn populate(tasks: &mut TaskStore, quests: &mut QuestLog) {
    tasks.add(
        TaskDraft {
            title: "Complete project proposal".to_string(),
            description: "Write and submit the project proposal for the new client".to_string(),
            difficulty: Difficulty::Hard,
            category: Category::Work,
            recurrence: None,
            due_day: Some(2),
        },
        0,
    );
    tasks.add(
        TaskDraft {
            title: "Morning workout".to_string(),
            description: "30 minutes of cardio and strength training".to_string(),
            difficulty: Difficulty::Medium,
            category: Category::Fitness,
            recurrence: Some(Recurrence::Daily),
            due_day: Some(0),
        },
        0,
    );
    // Seeded as already completed yesterday; its XP is baked into the
    // character's starting 75.
    let read = tasks.add(
        TaskDraft {
            title: "Read 20 pages".to_string(),
            description: "Continue reading 'Atomic Habits'".to_string(),
            difficulty: Difficulty::Easy,
            category: Category::Study,
            recurrence: Some(Recurrence::Daily),
            due_day: Some(0),
        },
        -1,
    );
    let _ = tasks.toggle(read);
    tasks.add(
        TaskDraft {
            title: "Prepare presentation".to_string(),
            description: "Create slides for the team meeting".to_string(),
            difficulty: Difficulty::Medium,
            category: Category::Work,
            recurrence: None,
            due_day: Some(3),
        },
        0,
    );
    tasks.add(
        TaskDraft {
            title: "Meditate for 10 minutes".to_string(),
            description: "Practice mindfulness meditation".to_string(),
            difficulty: Difficulty::Easy,
            category: Category::Health,
            recurrence: Some(Recurrence::Daily),
            due_day: Some(0),
        },
        0,
    );

    quests.add(QuestDraft {
        title: "Complete 3 tasks".to_string(),
        description: "Complete any 3 tasks today".to_string(),
        progress: 1,
        total: 3,
        xp: 50,
    });
    quests.add(QuestDraft {
        title: "Add a hard task".to_string(),
        description: "Create at least one hard difficulty task".to_string(),
        progress: 0,
        total: 1,
        xp: 30,
    });
    quests.add(QuestDraft {
        title: "Use the timer".to_string(),
        description: "Use the timer feature for at least 25 minutes".to_string(),
        progress: 0,
        total: 1,
        xp: 20,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_character_matches_fixed_values() {
        let character = character();
        assert_eq!(character.level, 1);
        assert_eq!(character.current_xp, 75);
        assert_eq!(character.xp_to_next_level, 100);
        assert_eq!(character.title, "Novice Hunter");
        assert_eq!(character.titles.len(), 3);
        assert_eq!(character.attributes, Attributes::new(42, 65, 58, 37));
    }

    #[test]
    fn seed_stores_have_expected_shape() {
        let mut tasks = TaskStore::new();
        let mut quests = QuestLog::new();
        populate(&mut tasks, &mut quests);

        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks.completed_count(), 1);
        assert_eq!(quests.len(), 3);
        assert_eq!(quests.completed_count(), 0);
    }
}
