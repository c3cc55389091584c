//! Achievements command handler.
//!
//! Lists every achievement with its unlocked state, or locks them all
//! again with `--reset`. Unlocks themselves happen in the engine during
//! settlement; this command only reads and resets the persisted set.

use crate::config;
use crate::error::CliError;
use felt_engine::achievements::Achievement;
use felt_engine::store::{load_achievements, save_achievements, JsonFileStore, Store};
use std::io::Write;

/// Handle the achievements command.
pub fn handle_achievements_command(
    reset: bool,
    out: &mut dyn Write,
    _err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let mut store = JsonFileStore::open(cfg.state_path());
    run_achievements(&mut store, reset, out)
}

fn run_achievements(store: &mut dyn Store, reset: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let mut tracker = load_achievements(store);
    if reset {
        tracker.reset();
        save_achievements(store, &tracker)?;
        writeln!(out, "achievements reset")?;
        return Ok(());
    }
    for a in Achievement::all() {
        let mark = if tracker.is_unlocked(a) { "x" } else { " " };
        writeln!(out, "[{}] {}: {}", mark, a.title(), a.description())?;
    }
    Ok(())
}
