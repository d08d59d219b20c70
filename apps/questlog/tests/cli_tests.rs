//! Integration tests for Questlog CLI commands.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use questlog::cli::{cmd_quests, cmd_simulate, cmd_status, cmd_tasks};

// =============================================================================
// STATUS COMMAND TESTS
// =============================================================================

#[test]
fn test_status_text_mode() {
    assert!(cmd_status(false).is_ok());
}

#[test]
fn test_status_json_mode() {
    assert!(cmd_status(true).is_ok());
}

// =============================================================================
// LISTING COMMAND TESTS
// =============================================================================

#[test]
fn test_tasks_text_mode() {
    assert!(cmd_tasks(false).is_ok());
}

#[test]
fn test_tasks_json_mode() {
    assert!(cmd_tasks(true).is_ok());
}

#[test]
fn test_quests_text_mode() {
    assert!(cmd_quests(false).is_ok());
}

#[test]
fn test_quests_json_mode() {
    assert!(cmd_quests(true).is_ok());
}

// =============================================================================
// SIMULATE COMMAND TESTS
// =============================================================================

#[test]
fn test_simulate_with_seed() {
    assert!(cmd_simulate(Some(7), false).is_ok());
}

#[test]
fn test_simulate_with_seed_json_mode() {
    assert!(cmd_simulate(Some(7), true).is_ok());
}

#[test]
fn test_simulate_with_entropy() {
    assert!(cmd_simulate(None, false).is_ok());
}
