//! # CLI Module
//!
//! clap command definitions and their implementations.
//!
//! Every command builds a fresh seeded session: state is ephemeral by
//! design, so one-shot commands always start from the seed records.
//! `serve` hands its session to the HTTP layer, where it lives for the
//! lifetime of the process.

use clap::{Parser, Subcommand};
use questlog_core::{
    AwardOutcome, Character, FocusKind, QuestId, QuestLog, RngRoller, Session, TaskId, TaskStore,
    TaskToggle,
};
use serde::Serialize;
use std::net::SocketAddr;
use thiserror::Error;

// =============================================================================
// COMMAND DEFINITIONS
// =============================================================================

/// Command-line interface for the Questlog session server.
#[derive(Debug, Parser)]
#[command(
    name = "questlog",
    version,
    about = "Gamified task manager with RPG progression"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the seeded character sheet.
    Status {
        /// Emit JSON instead of the text sheet.
        #[arg(long)]
        json: bool,
    },

    /// List the seeded tasks.
    Tasks {
        /// Emit JSON instead of text lines.
        #[arg(long)]
        json: bool,
    },

    /// List the seeded daily quests.
    Quests {
        /// Emit JSON instead of text lines.
        #[arg(long)]
        json: bool,
    },

    /// Drive the seeded session through a scripted day and print the
    /// progression trace.
    Simulate {
        /// Seed for the growth roller; omit for entropy.
        #[arg(long, env = "QUESTLOG_SEED")]
        seed: Option<u64>,

        /// Emit the trace as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Serve the session over HTTP.
    Serve {
        /// Bind address.
        #[arg(long, default_value = "127.0.0.1:7878", env = "QUESTLOG_ADDR")]
        addr: SocketAddr,

        /// Seed for the growth roller; omit for entropy.
        #[arg(long, env = "QUESTLOG_SEED")]
        seed: Option<u64>,
    },
}

/// CLI-level errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Core(#[from] questlog_core::CoreError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build a session with the requested determinism.
fn build_session(seed: Option<u64>) -> Session {
    let roller = match seed {
        Some(seed) => RngRoller::seeded(seed),
        None => RngRoller::from_entropy(),
    };
    Session::seeded(Box::new(roller))
}

// =============================================================================
// COMMANDS
// =============================================================================

pub fn cmd_status(json: bool) -> Result<(), CliError> {
    let session = build_session(None);
    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        print!("{}", render_character(session.character()));
    }
    Ok(())
}

pub fn cmd_tasks(json: bool) -> Result<(), CliError> {
    let session = build_session(None);
    if json {
        let tasks: Vec<_> = session.tasks().tasks().collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        print!("{}", render_tasks(session.tasks()));
    }
    Ok(())
}

pub fn cmd_quests(json: bool) -> Result<(), CliError> {
    let session = build_session(None);
    if json {
        let quests: Vec<_> = session.quests().quests().collect();
        println!("{}", serde_json::to_string_pretty(&quests)?);
    } else {
        print!("{}", render_quests(session.quests()));
    }
    Ok(())
}

/// One step of the scripted day.
#[derive(Debug, Serialize)]
struct SimEvent {
    label: String,
    outcome: AwardOutcome,
}

pub fn cmd_simulate(seed: Option<u64>, json: bool) -> Result<(), CliError> {
    let mut session = build_session(seed);
    let mut trace = Vec::new();

    // The scripted day: two tasks, a quest, a pomodoro, then the hard
    // task that was due first.
    for id in [TaskId(2), TaskId(5)] {
        push_toggle(&mut session, id, &mut trace)?;
    }

    if let Some(outcome) = session.complete_quest(QuestId(1))? {
        let label = quest_label(&session, QuestId(1));
        trace.push(SimEvent { label, outcome });
    }

    let outcome = session.complete_focus(FocusKind::Pomodoro)?;
    trace.push(SimEvent {
        label: "focus session (pomodoro)".to_string(),
        outcome,
    });

    push_toggle(&mut session, TaskId(1), &mut trace)?;

    if json {
        let report = serde_json::json!({
            "trace": trace,
            "character": session.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for event in &trace {
            print!("{}", render_event(event));
        }
        print!("{}", render_character(session.character()));
    }

    Ok(())
}

pub fn cmd_serve(addr: SocketAddr, seed: Option<u64>) -> Result<(), CliError> {
    let session = build_session(seed);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(crate::api::serve(addr, session))?;
    Ok(())
}

fn push_toggle(
    session: &mut Session,
    id: TaskId,
    trace: &mut Vec<SimEvent>,
) -> Result<(), CliError> {
    let label = session
        .tasks()
        .get(id)
        .map(|t| format!("task \"{}\" completed", t.title))
        .unwrap_or_else(|| format!("task {id} completed"));

    if let TaskToggle::Completed { outcome } = session.toggle_task(id)? {
        trace.push(SimEvent { label, outcome });
    }
    Ok(())
}

fn quest_label(session: &Session, id: QuestId) -> String {
    session
        .quests()
        .get(id)
        .map(|q| format!("quest \"{}\" completed", q.title))
        .unwrap_or_else(|| format!("quest {id} completed"))
}

// =============================================================================
// TEXT RENDERING
// =============================================================================
//
// All formatting lives here; the core emits raw structure only.

fn render_character(character: &Character) -> String {
    let mut output = String::new();

    output.push_str("┌─────────────────────────────────────┐\n");
    output.push_str("│ CHARACTER                           │\n");
    output.push_str(&format!(
        "│ - {} \"{}\"\n",
        character.name, character.title
    ));
    output.push_str(&format!(
        "│ - Level {}  ({}/{} xp, {}%)\n",
        character.level,
        character.current_xp,
        character.xp_to_next_level,
        character.xp_progress_percent()
    ));
    output.push_str(&format!("│ - Streak: {} days\n", character.streak));

    output.push_str("├─────────────────────────────────────┤\n");
    output.push_str("│ ATTRIBUTES                          │\n");
    for attribute in questlog_core::Attribute::ALL {
        output.push_str(&format!(
            "│ - {:<12} {}\n",
            attribute.as_str(),
            character.attributes.get(attribute)
        ));
    }

    output.push_str("├─────────────────────────────────────┤\n");
    output.push_str("│ TITLES                              │\n");
    for title in &character.titles {
        if title == &character.title {
            output.push_str(&format!("│ - {title} (active)\n"));
        } else {
            output.push_str(&format!("│ - {title}\n"));
        }
    }

    output.push_str("└─────────────────────────────────────┘\n");
    output
}

fn render_tasks(tasks: &TaskStore) -> String {
    let mut output = String::new();
    for task in tasks.tasks() {
        let mark = if task.completed { "x" } else { " " };
        let stars = "*".repeat(task.difficulty.stars() as usize);
        output.push_str(&format!(
            "[{mark}] #{} {}  {}({stars}) {}\n",
            task.id, task.title, task.difficulty, task.category
        ));
    }
    output
}

fn render_quests(quests: &QuestLog) -> String {
    let mut output = String::new();
    for quest in quests.quests() {
        let mark = if quest.completed { "x" } else { " " };
        output.push_str(&format!(
            "[{mark}] #{} {}  {}/{}  +{} xp\n",
            quest.id, quest.title, quest.progress, quest.total, quest.xp
        ));
    }
    output.push_str(&format!(
        "daily progress: {}%\n",
        quests.progress_percent()
    ));
    output
}

fn render_event(event: &SimEvent) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}  +{} xp\n", event.label, event.outcome.awarded));
    for level_up in &event.outcome.level_ups {
        output.push_str(&format!(
            "  LEVEL UP -> {} (next threshold {})  str +{} int +{} dis +{} hea +{}\n",
            level_up.level,
            level_up.new_threshold,
            level_up.gains.strength,
            level_up.gains.intelligence,
            level_up.gains.discipline,
            level_up.gains.health
        ));
    }
    output
}
