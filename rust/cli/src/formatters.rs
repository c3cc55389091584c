//! Card and hand formatters for terminal display.
//!
//! This module provides pure functions for formatting blackjack game
//! elements (cards, hands, the dealer's masked hand) for terminal output.
//! It supports Unicode card symbols with ASCII fallback for terminal
//! environments that don't support Unicode rendering.
//!
//! ## Unicode vs ASCII Fallback
//!
//! The module automatically detects whether the terminal supports Unicode
//! symbols by checking environment variables on Windows (WT_SESSION,
//! TERM_PROGRAM, VSCODE_INJECTION) and assumes Unicode support on
//! Unix-like systems.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters

use felt_engine::cards::{Card, Rank, Suit};
use felt_engine::hand::Hand;

/// Check if the terminal supports Unicode card symbols by detecting modern
/// terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a string (A, 2-9, T, J, Q, K).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    }
    .to_string()
}

/// Format a Card as a string combining rank and suit.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a full hand with its score, e.g. `A♠ K♥ (21)`.
pub fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(format_card).collect();
    format!("{} ({})", cards.join(" "), hand.score())
}

/// Format the dealer's hand while the hole card is still face down: the
/// up-card plus a placeholder, scored by the up-card alone.
pub fn format_masked_hand(hand: &Hand) -> String {
    match hand.cards().first() {
        Some(up) => format!("{} ?? ({})", format_card(up), up.value()),
        None => String::new(),
    }
}
