//! Statistics aggregation command for round-history analysis.
//!
//! Reads a JSONL file written by `sim --output` (one [`RoundRecord`] per
//! line) and computes summary metrics: rounds, per-outcome counts, net
//! chip movement, dealer busts, and a per-seat breakdown. Malformed lines
//! are reported as warnings and skipped; they never abort the run.

use crate::error::CliError;
use crate::ui;
use felt_engine::logger::RoundRecord;
use felt_engine::table::Outcome;
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Default)]
struct SeatTotals {
    wins: u64,
    losses: u64,
    pushes: u64,
    net: i64,
}

/// Aggregates statistics from a JSONL round-history file.
///
/// # Arguments
///
/// * `input` - Path to a JSONL file of round records
/// * `out` - Output stream for the statistics report
/// * `err` - Output stream for warnings about skipped records
///
/// # Returns
///
/// `Result<(), CliError>`: `Ok(())` when the file was readable, otherwise
/// an `Err` that maps to exit code `2`.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = std::fs::read_to_string(&input)
        .map_err(|e| CliError::InvalidInput(format!("cannot read {}: {}", input, e)))?;

    let mut rounds = 0u64;
    let mut skipped = 0u64;
    let mut dealer_busts = 0u64;
    let mut blackjacks = 0u64;
    let mut net = 0i64;
    let mut seats: BTreeMap<String, SeatTotals> = BTreeMap::new();

    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: RoundRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                ui::display_warning(err, &format!("skipping malformed record at line {}", lineno + 1))?;
                continue;
            }
        };

        rounds += 1;
        if record.dealer_busted {
            dealer_busts += 1;
        }
        for result in &record.results {
            let entry = seats.entry(result.name.clone()).or_default();
            match result.outcome {
                Outcome::Win => entry.wins += 1,
                Outcome::Lose => entry.losses += 1,
                Outcome::Push => entry.pushes += 1,
            }
            let delta = i64::from(result.payout) - i64::from(result.bet);
            entry.net += delta;
            net += delta;
            if result.blackjack {
                blackjacks += 1;
            }
        }
    }

    writeln!(out, "rounds={} skipped={}", rounds, skipped)?;
    writeln!(out, "dealer_busts={} blackjacks={}", dealer_busts, blackjacks)?;
    writeln!(out, "net={:+}", net)?;
    for (name, totals) in &seats {
        writeln!(
            out,
            "{}: {}W/{}L/{}P net={:+}",
            name, totals.wins, totals.losses, totals.pushes, totals.net
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_engine::logger::{RoundLogger, SeatResult};

    fn record(id: &str, outcome: Outcome, bet: u32, payout: u32) -> RoundRecord {
        RoundRecord {
            round_id: id.to_string(),
            seed: Some(1),
            dealer_score: 19,
            dealer_busted: false,
            dealer_cards: Vec::new(),
            results: vec![SeatResult {
                name: "Tess".to_string(),
                outcome,
                blackjack: false,
                bet,
                payout,
                score: 20,
            }],
            ts: None,
        }
    }

    #[test]
    fn test_stats_missing_file_is_invalid_input() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_stats_command("no-such-file.jsonl".to_string(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_stats_aggregates_and_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");
        {
            let mut logger = RoundLogger::create(&path).unwrap();
            logger.write(&record("20260829-000001", Outcome::Win, 100, 200)).unwrap();
            logger.write(&record("20260829-000002", Outcome::Lose, 50, 0)).unwrap();
        }
        {
            let mut f = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
            writeln!(f, "{{not json").unwrap();
            writeln!(f).unwrap();
        }

        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_stats_command(path.to_string_lossy().into_owned(), &mut out, &mut err).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("rounds=2 skipped=1"), "got: {}", output);
        assert!(output.contains("net=+50"), "got: {}", output);
        assert!(output.contains("Tess: 1W/1L/0P net=+50"), "got: {}", output);

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("malformed record at line 3"), "got: {}", errors);
    }
}
