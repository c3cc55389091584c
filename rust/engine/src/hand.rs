use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// An ordered collection of cards belonging to one seat for one round.
///
/// The score is computed, never stored: every ace starts at 11 and aces
/// are demoted to 1 one at a time while the running total exceeds 21.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Blackjack total with soft-ace demotion.
    pub fn score(&self) -> u32 {
        let mut total: u32 = 0;
        let mut aces = 0u32;
        for c in &self.cards {
            total += u32::from(c.value());
            if c.rank.is_ace() {
                aces += 1;
            }
        }
        while total > 21 && aces > 0 {
            total -= 10; // ace counts 1 instead of 11
            aces -= 1;
        }
        total
    }

    /// A natural: exactly two cards totalling 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    pub fn is_busted(&self) -> bool {
        self.score() > 21
    }

    /// True iff after demotion at least one ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        let aces = self.cards.iter().filter(|c| c.rank.is_ace()).count() as u32;
        if aces == 0 {
            return false;
        }
        let non_ace: u32 = self
            .cards
            .iter()
            .filter(|c| !c.rank.is_ace())
            .map(|c| u32::from(c.value()))
            .sum();
        // total with every ace as 1, plus the 10 one promoted ace adds
        non_ace + aces + 10 <= 21
    }
}
