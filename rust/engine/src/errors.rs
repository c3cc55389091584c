use thiserror::Error;

use crate::table::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Bet of {amount} would exceed the table limit of {limit}")]
    OverTableLimit { amount: u32, limit: u32 },
    #[error("Insufficient bankroll")]
    InsufficientBankroll,
    #[error("Automated seats do not wager")]
    AutomatedWager,
    #[error("No seat at index {0}")]
    NoSuchSeat(usize),
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    OutOfTurn { expected: usize, actual: usize },
    #[error("Not allowed during the {phase:?} phase")]
    WrongPhase { phase: Phase },
    #[error("Double requires exactly two cards and bankroll >= bet")]
    DoubleNotAllowed,
    #[error("Place a bet first")]
    NoBet,
    #[error("Seats can only join or leave between rounds")]
    RoundInProgress,
    #[error("Table is full")]
    TableFull,
    #[error("No seats at the table")]
    EmptyTable,
}
