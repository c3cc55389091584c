//! Simulation command for large-scale round generation.
//!
//! Runs flat-betting basic-strategy seats for N rounds without any
//! interactive input, reports aggregate results, and can append one
//! [`RoundRecord`] per round to a JSONL file for the `stats` command.
//!
//! Seats that can no longer cover the flat bet leave the table between
//! rounds (publishing their final bankroll to the in-session leaderboard);
//! the run stops early if every seat goes broke.

use crate::config;
use crate::error::CliError;
use crate::ui;
use felt_ai::create_strategy;
use felt_engine::logger::{RoundLogger, RoundRecord, SeatResult};
use felt_engine::shoe::Shoe;
use felt_engine::table::{Outcome, Phase, Table, TABLE_LIMIT};
use std::io::Write;

/// Handle the sim command: drive N automated rounds and report.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to simulate (must be >= 1)
/// * `seats` - Number of wagering seats (1-6, enforced by clap)
/// * `bet` - Flat bet each seat places every round (1..=table limit)
/// * `seed` - Shoe RNG seed for reproducibility (default: random)
/// * `output` - Optional JSONL path for per-round records
/// * `out` - Output stream for the report
/// * `err` - Error stream for warnings
pub fn handle_sim_command(
    rounds: u64,
    seats: u32,
    bet: u32,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    if bet == 0 || bet > TABLE_LIMIT {
        let msg = format!("bet must be between 1 and the table limit of {}", TABLE_LIMIT);
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let cfg = resolved.config;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    writeln!(out, "sim: rounds={} seats={} bet={} seed={}", rounds, seats, bet, seed)?;

    let mut table = Table::with_shoe(Shoe::with_decks(cfg.decks, seed));
    for i in 0..seats {
        table.add_seat(format!("Seat {}", i + 1), cfg.starting_bankroll, false)?;
    }
    let logger = output.map(RoundLogger::create).transpose()?;

    run_sim(&mut table, logger, rounds, bet, seed, out, err)
}

#[derive(Debug, Default)]
struct SimTotals {
    rounds: u64,
    wins: u64,
    losses: u64,
    pushes: u64,
    blackjacks: u64,
    dealer_busts: u64,
    retired: u64,
    net: i64,
}

/// Core simulation loop over an injected table (module-private).
fn run_sim(
    table: &mut Table,
    mut logger: Option<RoundLogger>,
    rounds: u64,
    bet: u32,
    seed: u64,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let strategy = create_strategy("basic");
    let mut totals = SimTotals::default();

    for round in 1..=rounds {
        if round > 1 {
            table.start_new_round()?;
            table.drain_events();
        }

        // seats that can't cover the flat bet retire between rounds
        while let Some(i) = table.seats().iter().position(|s| s.bankroll() < bet) {
            let entry = table.seat_leaves(i)?;
            totals.retired += 1;
            ui::display_warning(
                err,
                &format!("{} retires broke with {} chips", entry.name, entry.bankroll),
            )?;
        }
        if table.seats().is_empty() {
            writeln!(out, "every seat went broke after {} rounds", totals.rounds)?;
            break;
        }

        for i in 0..table.seats().len() {
            table.place_bet(i, bet)?;
        }
        table.advance_readiness()?;

        while table.phase() == Phase::PlayerTurns {
            let Some(active) = table.active_seat() else {
                break;
            };
            let action = super::automated_action(table, active, strategy.as_ref());
            table.player_action(active, action)?;
        }
        while table.phase() == Phase::DealerTurn {
            table.dealer_step()?;
        }
        table.drain_events();
        totals.rounds += 1;

        let dealer_score = table.dealer_hand().score();
        let dealer_busted = dealer_score > 21;
        if dealer_busted {
            totals.dealer_busts += 1;
        }
        for o in table.last_outcomes() {
            match o.outcome {
                Outcome::Win => totals.wins += 1,
                Outcome::Lose => totals.losses += 1,
                Outcome::Push => totals.pushes += 1,
            }
            if o.blackjack {
                totals.blackjacks += 1;
            }
            totals.net += i64::from(o.payout) - i64::from(o.bet);
        }

        if let Some(lg) = logger.as_mut() {
            let record = RoundRecord {
                round_id: lg.next_id(),
                seed: Some(seed),
                dealer_score,
                dealer_busted,
                dealer_cards: table.dealer_hand().cards().to_vec(),
                results: table.last_outcomes().iter().map(SeatResult::from).collect(),
                ts: None,
            };
            lg.write(&record)?;
        }
    }

    writeln!(
        out,
        "rounds={} wins={} losses={} pushes={}",
        totals.rounds, totals.wins, totals.losses, totals.pushes
    )?;
    writeln!(
        out,
        "blackjacks={} dealer_busts={} retired={}",
        totals.blackjacks, totals.dealer_busts, totals.retired
    )?;
    writeln!(out, "net={:+}", totals.net)?;
    for s in table.seats() {
        let r = s.record();
        writeln!(
            out,
            "{}: bankroll {} ({}W/{}L/{}P)",
            s.name(),
            s.bankroll(),
            r.wins,
            r.losses,
            r.pushes
        )?;
    }
    Ok(())
}
