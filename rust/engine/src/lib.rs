//! # felt-engine: Blackjack Table Engine Core
//!
//! A deterministic single-table, multi-seat blackjack engine. Provides
//! the shoe, hand valuation, the round state machine, settlement, and
//! the achievement/leaderboard trackers, with reproducible RNG for
//! testing and replay.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`shoe`] - Multi-deck dealing shoe with ChaCha20 shuffling
//! - [`hand`] - Blackjack hand valuation with soft-ace demotion
//! - [`seat`] - Seat state: role, bankroll/bet custody, cumulative record
//! - [`table`] - The round state machine: betting, dealing, turns, settlement
//! - [`events`] - Engine-emitted events for a presentation layer
//! - [`achievements`] - Monotonic milestone unlocks
//! - [`leaderboard`] - Append-only published-bankroll list
//! - [`store`] - Abstract key-value persistence with tolerant loading
//! - [`logger`] - JSONL round history
//! - [`errors`] - Error types for table commands
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_engine::table::{Action, Phase, Table};
//!
//! let mut table = Table::new_with_seed(42);
//! let me = table.add_seat("Player 1", 1_000, false).unwrap();
//!
//! table.place_bet(me, 50).unwrap();
//! table.advance_readiness().unwrap(); // everyone has bet: cards fly
//!
//! while table.phase() == Phase::PlayerTurns {
//!     table.player_action(me, Action::Stand).unwrap();
//! }
//! while table.dealer_step().unwrap() {}
//! assert_eq!(table.phase(), Phase::RoundOver);
//! ```
//!
//! ## Determinism
//!
//! All outcomes are reproducible from the shoe seed:
//!
//! ```rust
//! use felt_engine::shoe::Shoe;
//!
//! let mut a = Shoe::new_with_seed(7);
//! let mut b = Shoe::new_with_seed(7);
//! assert_eq!(a.draw(), b.draw());
//! ```

pub mod achievements;
pub mod cards;
pub mod errors;
pub mod events;
pub mod hand;
pub mod leaderboard;
pub mod logger;
pub mod seat;
pub mod shoe;
pub mod store;
pub mod table;
