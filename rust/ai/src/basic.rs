//! Fixed basic-strategy table for automated seats.
//!
//! The table is a deliberate design constant reproduced verbatim, not a
//! heuristic: soft and hard totals each map (score, dealer up-card) to
//! hit/stand/double. No surrender, insurance, or splits exist at this
//! table, so neither do their rows.

use felt_engine::cards::Card;
use felt_engine::hand::Hand;
use felt_engine::table::Action;

use crate::Strategy;

/// Deterministic basic strategy.
///
/// # Decision table
///
/// Soft totals:
/// - 19+: stand
/// - 18: double vs 2-6, stand vs 7-8, hit vs 9/10/ace
/// - 17: double vs 3-6, else hit
/// - 16 and below: double vs 4-6, else hit
///
/// Hard totals:
/// - 17+: stand
/// - 13-16: stand vs 2-6, else hit
/// - 12: stand vs 4-6, else hit
/// - 11: double
/// - 10: double vs 2-9, else hit
/// - 9: double vs 3-6, else hit
/// - 8 and below: hit
#[derive(Debug, Clone, Default)]
pub struct BasicStrategy;

impl BasicStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for BasicStrategy {
    fn decide(&self, hand: &Hand, up: Card) -> Action {
        let score = hand.score();
        let up = u32::from(up.value()); // ace counts 11 here

        if hand.is_soft() {
            return match score {
                19.. => Action::Stand,
                18 => match up {
                    2..=6 => Action::Double,
                    7 | 8 => Action::Stand,
                    _ => Action::Hit, // 9, 10, ace
                },
                17 => match up {
                    3..=6 => Action::Double,
                    _ => Action::Hit,
                },
                _ => match up {
                    4..=6 => Action::Double,
                    _ => Action::Hit,
                },
            };
        }

        match score {
            17.. => Action::Stand,
            13..=16 => match up {
                2..=6 => Action::Stand,
                _ => Action::Hit,
            },
            12 => match up {
                4..=6 => Action::Stand,
                _ => Action::Hit,
            },
            11 => Action::Double,
            10 => match up {
                2..=9 => Action::Double,
                _ => Action::Hit,
            },
            9 => match up {
                3..=6 => Action::Double,
                _ => Action::Hit,
            },
            _ => Action::Hit,
        }
    }

    fn name(&self) -> &str {
        "BasicStrategy"
    }
}
