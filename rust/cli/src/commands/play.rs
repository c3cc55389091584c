//! # Play Command
//!
//! Interactive blackjack session at a shared table.
//!
//! The human player bets and acts via stdin; any `--ai` seats are filled
//! with automated, non-wagering players driven by the basic strategy.
//! The engine queues table events, and this module drains and renders
//! them after every command, so the display never leads the state.
//!
//! ## Features
//!
//! - Interactive input validation with clear error messages
//! - Rejected table commands surface as transient notices; the round goes on
//! - Graceful quit handling (user can exit with 'q' or 'quit')
//! - Achievements and the leaderboard persist across sessions

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_hand, format_masked_hand};
use crate::io_utils::read_stdin_line;
use crate::ui;
use felt_ai::create_strategy;
use felt_engine::events::{Spot, TableEvent};
use felt_engine::shoe::Shoe;
use felt_engine::store::{
    load_achievements, load_leaderboard, save_achievements, save_leaderboard, JsonFileStore, Store,
};
use felt_engine::table::{Action, Phase, Table};
use std::io::{BufRead, Write};

/// Handle the play command: an interactive session at the table.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play (must be >= 1)
/// * `ai` - Number of automated seats to fill (0-5)
/// * `seed` - Shoe RNG seed for reproducibility (default: random)
/// * `name` - Display name for the human seat (default: "Player")
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for bets and actions
///
/// # Returns
///
/// * `Ok(())` on successful completion
/// * `Err(CliError)` if rounds < 1, the configuration is invalid, or I/O fails
pub fn handle_play_command(
    rounds: u32,
    ai: u32,
    seed: Option<u64>,
    name: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let cfg = resolved.config;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    writeln!(out, "play: rounds={} ai={} seed={}", rounds, ai, seed)?;

    let mut table = Table::with_shoe(Shoe::with_decks(cfg.decks, seed));
    let mut store = JsonFileStore::open(cfg.state_path());
    *table.tracker_mut() = load_achievements(&store);
    *table.leaderboard_mut() = load_leaderboard(&store);

    table.add_seat(name.unwrap_or_else(|| "Player".to_string()), cfg.starting_bankroll, false)?;
    for i in 0..ai {
        table.add_seat(format!("Bot {}", i + 1), cfg.starting_bankroll, true)?;
    }

    run_play(&mut table, &mut store, rounds, out, err, stdin)
}

/// Core session loop over an injected table and store (module-private).
///
/// Tests drive this directly with a stacked shoe and an in-memory store.
fn run_play(
    table: &mut Table,
    store: &mut dyn Store,
    rounds: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let Some(human) = table.seats().iter().position(|s| !s.is_automated()) else {
        return Err(CliError::InvalidInput("no human seat at the table".to_string()));
    };
    let strategy = create_strategy("basic");
    let mut played = 0u32;
    let mut quit = false;

    'session: for round in 1..=rounds {
        if round > 1 {
            table.start_new_round()?;
            render_events(table, out)?;
        }
        writeln!(out, "-- Round {} --", round)?;

        while table.phase() == Phase::Betting {
            let bankroll = table.seat(human)?.bankroll();
            write!(out, "Bet [bankroll {}]: ", bankroll)?;
            out.flush()?;
            let Some(line) = read_stdin_line(stdin) else {
                break 'session;
            };
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                break 'session;
            }
            let Ok(amount) = line.parse::<u32>() else {
                ui::write_error(err, "enter a chip amount, or q to leave")?;
                continue;
            };
            if let Err(e) = table.place_bet(human, amount) {
                ui::write_error(err, &e.to_string())?;
                continue;
            }
            if let Err(e) = table.advance_readiness() {
                ui::write_error(err, &e.to_string())?;
            }
        }
        render_events(table, out)?;

        while table.phase() == Phase::PlayerTurns {
            let Some(active) = table.active_seat() else {
                break;
            };
            if active == human && !quit {
                writeln!(out, "Dealer: {}", format_masked_hand(table.dealer_hand()))?;
                writeln!(out, "You: {}", format_hand(table.seat(human)?.hand()))?;
                write!(out, "Action [h]it [s]tand [d]ouble [q]uit: ")?;
                out.flush()?;
                let action = match read_stdin_line(stdin) {
                    None => {
                        quit = true;
                        Action::Stand
                    }
                    Some(line) => match line.to_ascii_lowercase().as_str() {
                        "h" | "hit" => Action::Hit,
                        "s" | "stand" => Action::Stand,
                        "d" | "double" => Action::Double,
                        "q" | "quit" => {
                            quit = true;
                            Action::Stand
                        }
                        _ => {
                            ui::write_error(err, "unknown action; use h, s, d or q")?;
                            continue;
                        }
                    },
                };
                // a rejected action leaves the turn open, so surface it and re-prompt
                if let Err(e) = table.player_action(human, action) {
                    ui::write_error(err, &e.to_string())?;
                }
            } else {
                let action = super::automated_action(table, active, strategy.as_ref());
                table.player_action(active, action)?;
            }
            render_events(table, out)?;
        }

        while table.phase() == Phase::DealerTurn {
            table.dealer_step()?;
        }
        render_events(table, out)?;
        save_achievements(store, table.tracker())?;
        played += 1;
        if quit {
            break;
        }
    }

    if matches!(table.phase(), Phase::Betting | Phase::RoundOver) {
        write!(out, "Publish your bankroll to the leaderboard? [y/N]: ")?;
        out.flush()?;
        if let Some(line) = read_stdin_line(stdin)
            && line.eq_ignore_ascii_case("y")
        {
            let entry = table.seat_leaves(human)?;
            save_leaderboard(store, table.leaderboard())?;
            writeln!(out, "Published {} with {} chips", entry.name, entry.bankroll)?;
        }
    }
    writeln!(out, "Rounds played: {}", played)?;
    Ok(())
}

fn seat_label(table: &Table, seat: usize) -> String {
    table
        .seat(seat)
        .map(|s| s.name().to_string())
        .unwrap_or_else(|_| format!("seat {}", seat))
}

fn action_verb(action: Action) -> &'static str {
    match action {
        Action::Hit => "hits",
        Action::Stand => "stands",
        Action::Double => "doubles down",
    }
}

/// Drain the table's event queue and narrate it.
fn render_events(table: &mut Table, out: &mut dyn Write) -> std::io::Result<()> {
    let events = table.drain_events();
    for event in events {
        match event {
            TableEvent::BetPlaced { seat, bet, bankroll } => {
                writeln!(out, "{} bets {} ({} behind)", seat_label(table, seat), bet, bankroll)?;
            }
            TableEvent::CardDealt { to: Spot::Seat(seat), card: Some(card) } => {
                writeln!(out, "{} draws {}", seat_label(table, seat), format_card(&card))?;
            }
            TableEvent::CardDealt { to: Spot::Dealer, card: Some(card) } => {
                writeln!(out, "Dealer shows {}", format_card(&card))?;
            }
            TableEvent::CardDealt { to: Spot::Dealer, card: None } => {
                writeln!(out, "Dealer takes the hole card")?;
            }
            TableEvent::SeatActed { seat, action } => {
                writeln!(out, "{} {}", seat_label(table, seat), action_verb(action))?;
            }
            TableEvent::TurnTimedOut { seat } => {
                writeln!(out, "{} timed out and stands", seat_label(table, seat))?;
            }
            TableEvent::HoleCardRevealed { card } => {
                writeln!(out, "Dealer reveals {}", format_card(&card))?;
            }
            TableEvent::RoundSettled { outcomes } => {
                for o in outcomes {
                    let tag = if o.blackjack { ", blackjack" } else { "" };
                    writeln!(
                        out,
                        "{}: {} (bet {}, payout {}, score {}{})",
                        o.name,
                        o.outcome.as_str(),
                        o.bet,
                        o.payout,
                        o.score,
                        tag
                    )?;
                }
            }
            TableEvent::ShoeReshuffled => writeln!(out, "Shoe reshuffled")?,
            TableEvent::AchievementUnlocked { achievement } => {
                writeln!(out, "Achievement unlocked: {}", achievement.title())?;
            }
            TableEvent::SeatLeft { entry, .. } => {
                writeln!(out, "{} leaves the table with {} chips", entry.name, entry.bankroll)?;
            }
            TableEvent::CardDealt { to: Spot::Seat(_), card: None } => {}
            TableEvent::PhaseChanged { .. }
            | TableEvent::BettingFocus { .. }
            | TableEvent::TurnStarted { .. }
            | TableEvent::TurnEnded { .. } => {}
        }
    }
    Ok(())
}
