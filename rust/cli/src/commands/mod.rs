//! Command handler modules for the felt CLI.
//!
//! This module contains individual handler functions for each CLI subcommand.
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: core logic operating on an injected table/store,
//!   so tests can drive it with a stacked shoe and an in-memory store
//! - Dependency injection: output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: all errors propagated via the `CliError` enum

mod achievements;
mod cfg;
mod leaderboard;
mod play;
mod sim;
mod stats;

pub use achievements::handle_achievements_command;
pub use cfg::handle_cfg_command;
pub use leaderboard::handle_leaderboard_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

use felt_ai::Strategy;
use felt_engine::table::{Action, Table};

/// Decide the active automated or scripted seat's move.
///
/// Strategy `Double` decisions are advisory; they degrade to a hit when
/// the seat already drew a third card or can't cover the extra stake.
pub(crate) fn automated_action(table: &Table, seat: usize, strategy: &dyn Strategy) -> Action {
    let Some(up) = table.dealer_upcard() else {
        return Action::Stand;
    };
    let Ok(s) = table.seat(seat) else {
        return Action::Stand;
    };
    let action = strategy.decide(s.hand(), up);
    if action == Action::Double && (s.hand().len() != 2 || s.bankroll() < s.bet()) {
        return Action::Hit;
    }
    action
}
