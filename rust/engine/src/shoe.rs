use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Default number of standard decks in the shoe.
pub const DEFAULT_DECKS: usize = 6;

/// A dealing shoe holding one or more shuffled 52-card decks.
///
/// Cards are drawn from the top (the end of the vector). The shoe never
/// runs dry from a caller's point of view: drawing from an empty shoe
/// performs a full reset and shuffle first.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: usize,
    rng: ChaCha20Rng,
}

impl Shoe {
    /// Six-deck shoe, shuffled, with a deterministic RNG stream.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_decks(DEFAULT_DECKS, seed)
    }

    pub fn with_decks(decks: usize, seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let mut shoe = Self {
            cards: Vec::new(),
            decks: decks.max(1),
            rng,
        };
        shoe.reset();
        shoe
    }

    /// Test constructor: a shoe that yields `cards` in the given order and
    /// falls back to a seeded reshuffle once they are exhausted.
    pub fn stacked(cards: Vec<Card>) -> Self {
        let mut ordered = cards;
        ordered.reverse(); // draw comes off the end
        Self {
            cards: ordered,
            decks: 1,
            rng: ChaCha20Rng::seed_from_u64(0),
        }
    }

    /// Rebuild the full rank x suit x deck-count set and shuffle it.
    pub fn reset(&mut self) {
        self.cards.clear();
        for _ in 0..self.decks {
            self.cards.extend(full_deck());
        }
        self.cards.shuffle(&mut self.rng);
    }

    /// Remove and return the top card, resetting the shoe first if empty.
    pub fn draw(&mut self) -> Card {
        if let Some(c) = self.cards.pop() {
            return c;
        }
        self.reset();
        match self.cards.pop() {
            Some(c) => c,
            // reset() always rebuilds at least one full deck
            None => unreachable!("reset left an empty shoe"),
        }
    }

    /// Fraction of the shoe already drawn since the last shuffle, in [0, 1].
    pub fn penetration(&self) -> f64 {
        1.0 - self.cards.len() as f64 / self.total() as f64
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn total(&self) -> usize {
        52 * self.decks
    }
}
