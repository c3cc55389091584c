use serde::{Deserialize, Serialize};

use crate::errors::TableError;
use crate::hand::Hand;

/// Default bankroll for a newly seated player, in chips.
pub const STARTING_BANKROLL: u32 = 1_000;

/// What kind of participant occupies a seat.
///
/// The house is categorically different from the other roles (never
/// wagers, plays a fixed drawing rule, hides its second card), so it is a
/// variant rather than a subtype.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// A caller-driven participant.
    Human,
    /// A strategy-driven participant; never wagers.
    Automated,
    /// The dealer.
    House,
}

/// Cumulative win/loss/push record for a seat, kept across rounds.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
}

/// One participant at the table: identity, chips, and the current hand.
///
/// Bankroll and bet hold the same chips in mutually exclusive custody:
/// [`Seat::stake`] moves chips bankroll -> bet, settlement moves them
/// back (or nowhere, on a loss) and zeroes the bet.
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    role: Role,
    bankroll: u32,
    bet: u32,
    hand: Hand,
    record: SeatRecord,
}

impl Seat {
    pub fn new(name: impl Into<String>, bankroll: u32, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            bankroll,
            bet: 0,
            hand: Hand::new(),
            record: SeatRecord::default(),
        }
    }

    /// The dealer's seat. Its bankroll is never consulted; the house is
    /// identified by role.
    pub fn house() -> Self {
        Self::new("Dealer", 0, Role::House)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_automated(&self) -> bool {
        self.role == Role::Automated
    }

    pub fn bankroll(&self) -> u32 {
        self.bankroll
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn record(&self) -> SeatRecord {
        self.record
    }

    pub(crate) fn record_mut(&mut self) -> &mut SeatRecord {
        &mut self.record
    }

    /// Move chips from bankroll into the live bet.
    pub(crate) fn stake(&mut self, amount: u32) -> Result<(), TableError> {
        if amount > self.bankroll {
            return Err(TableError::InsufficientBankroll);
        }
        self.bankroll -= amount;
        self.bet += amount;
        Ok(())
    }

    /// Pay out `amount` to the bankroll and release custody of the bet.
    pub(crate) fn settle(&mut self, amount: u32) {
        self.bankroll = self.bankroll.saturating_add(amount);
        self.bet = 0;
    }
}
