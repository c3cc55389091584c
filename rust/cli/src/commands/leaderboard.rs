//! Leaderboard command handler.
//!
//! Shows the bankrolls published by seats that left the table, best
//! first, or wipes the list with `--clear`. The board is append-only
//! during play; clearing it here is the only way entries disappear.

use crate::config;
use crate::error::CliError;
use felt_engine::store::{load_leaderboard, save_leaderboard, JsonFileStore, Store};
use std::io::Write;

/// Handle the leaderboard command.
pub fn handle_leaderboard_command(
    clear: bool,
    out: &mut dyn Write,
    _err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let mut store = JsonFileStore::open(cfg.state_path());
    run_leaderboard(&mut store, clear, out)
}

fn run_leaderboard(store: &mut dyn Store, clear: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let mut board = load_leaderboard(store);
    if clear {
        board.clear();
        save_leaderboard(store, &board)?;
        writeln!(out, "leaderboard cleared")?;
        return Ok(());
    }
    if board.is_empty() {
        writeln!(out, "leaderboard is empty")?;
        return Ok(());
    }
    for (rank, entry) in board.sorted_desc().iter().enumerate() {
        writeln!(out, "{:>2}. {} {}", rank + 1, entry.name, entry.bankroll)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_engine::leaderboard::Leaderboard;
    use felt_engine::store::MemoryStore;

    fn seeded_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        let mut board = Leaderboard::new();
        board.push("Ada", 1_500);
        board.push("Bel", 2_400);
        board.push("Cyn", 900);
        save_leaderboard(&mut store, &board).unwrap();
        store
    }

    #[test]
    fn test_leaderboard_sorted_best_first() {
        let mut store = seeded_store();
        let mut out = Vec::new();
        run_leaderboard(&mut store, false, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Bel 2400"), "got: {}", lines[0]);
        assert!(lines[2].contains("Cyn 900"), "got: {}", lines[2]);
    }

    #[test]
    fn test_leaderboard_empty_message() {
        let mut store = MemoryStore::new();
        let mut out = Vec::new();
        run_leaderboard(&mut store, false, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("empty"));
    }

    #[test]
    fn test_leaderboard_clear_persists() {
        let mut store = seeded_store();
        let mut out = Vec::new();
        run_leaderboard(&mut store, true, &mut out).unwrap();
        assert!(load_leaderboard(&store).is_empty());
    }
}
