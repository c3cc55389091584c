use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;
use crate::cards::Card;
use crate::leaderboard::LeaderboardEntry;
use crate::table::{Action, Phase, SeatOutcome};

/// Where a dealt card landed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Spot {
    Seat(usize),
    Dealer,
}

/// Engine-emitted notifications for a presentation layer to consume.
///
/// The table holds no reference to any renderer; it queues these and the
/// caller drains them after each command. A face-down deal carries no
/// card so subscribers cannot peek at the hole card before the reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableEvent {
    PhaseChanged { phase: Phase },
    BettingFocus { seat: usize },
    BetPlaced { seat: usize, bet: u32, bankroll: u32 },
    CardDealt { to: Spot, card: Option<Card> },
    TurnStarted { seat: usize },
    TurnEnded { seat: usize },
    SeatActed { seat: usize, action: Action },
    TurnTimedOut { seat: usize },
    HoleCardRevealed { card: Card },
    RoundSettled { outcomes: Vec<SeatOutcome> },
    ShoeReshuffled,
    AchievementUnlocked { achievement: Achievement },
    SeatLeft { seat: usize, entry: LeaderboardEntry },
}
