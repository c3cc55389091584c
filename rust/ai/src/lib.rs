//! # felt-ai: Automated-Seat Strategy for Blackjack
//!
//! Decision-making for automated seats. A [`Strategy`] maps the seat's
//! hand and the dealer's up-card to a table [`Action`]; the engine stays
//! strategy-free and the driver feeds decisions back as ordinary player
//! actions.
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_ai::{create_strategy, Strategy};
//! use felt_engine::cards::{Card, Rank, Suit};
//! use felt_engine::hand::Hand;
//! use felt_engine::table::Action;
//!
//! let strategy = create_strategy("basic");
//!
//! let mut hand = Hand::new();
//! hand.add(Card { suit: Suit::Hearts, rank: Rank::Ace });
//! hand.add(Card { suit: Suit::Clubs, rank: Rank::Eight });
//!
//! let up = Card { suit: Suit::Spades, rank: Rank::Ten };
//! assert_eq!(strategy.decide(&hand, up), Action::Stand); // soft 19
//! ```

use felt_engine::cards::Card;
use felt_engine::hand::Hand;
use felt_engine::table::Action;

pub mod basic;

/// Decision interface for automated seats.
pub trait Strategy: Send + Sync {
    /// Choose an action for `hand` facing the dealer's `up` card.
    ///
    /// A `Double` decision is advisory: the driver downgrades it to a hit
    /// when the seat can't cover the extra stake or already drew.
    fn decide(&self, hand: &Hand, up: Card) -> Action;

    /// Identifier of this strategy implementation.
    fn name(&self) -> &str;
}

/// Factory for strategies by kind string.
///
/// # Supported kinds
///
/// - `"basic"` - the fixed basic-strategy table
///
/// Unknown kinds fall back to `"basic"`.
pub fn create_strategy(kind: &str) -> Box<dyn Strategy> {
    match kind {
        "basic" => Box::new(basic::BasicStrategy::new()),
        _ => Box::new(basic::BasicStrategy::new()),
    }
}
