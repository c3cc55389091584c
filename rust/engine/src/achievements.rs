use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Unlockable milestones. Unlocks are monotonic: once earned, a milestone
/// stays unlocked until an explicit [`AchievementTracker::reset`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    /// Win your first hand.
    FirstWin,
    /// Get a blackjack.
    Blackjack,
    /// Win with five or more cards without busting.
    FiveCardCharlie,
    /// Win three hands in a row.
    Streak3,
    /// Place a single bet of 100 or more.
    HighRoller,
    /// Lose all your money.
    FreshStart,
}

impl Achievement {
    pub fn all() -> [Achievement; 6] {
        [
            Achievement::FirstWin,
            Achievement::Blackjack,
            Achievement::FiveCardCharlie,
            Achievement::Streak3,
            Achievement::HighRoller,
            Achievement::FreshStart,
        ]
    }

    /// Stable key used in the persisted unlocked set.
    pub fn key(self) -> &'static str {
        match self {
            Achievement::FirstWin => "first_win",
            Achievement::Blackjack => "blackjack",
            Achievement::FiveCardCharlie => "five_card_charlie",
            Achievement::Streak3 => "streak3",
            Achievement::HighRoller => "high_roller",
            Achievement::FreshStart => "fresh_start",
        }
    }

    pub fn from_key(key: &str) -> Option<Achievement> {
        Achievement::all().into_iter().find(|a| a.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstWin => "First Victory",
            Achievement::Blackjack => "Blackjack!",
            Achievement::FiveCardCharlie => "Five Card Charlie",
            Achievement::Streak3 => "On a Roll",
            Achievement::HighRoller => "High Roller",
            Achievement::FreshStart => "Fresh Start",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::FirstWin => "Win your first hand.",
            Achievement::Blackjack => "Get a Blackjack.",
            Achievement::FiveCardCharlie => "Win with 5 cards without busting.",
            Achievement::Streak3 => "Win 3 hands in a row.",
            Achievement::HighRoller => "Place a bet of 100 or more.",
            Achievement::FreshStart => "Lose all your money.",
        }
    }
}

/// Facts about the tracked seat at the end of one round, as seen by the
/// tracker. `won`/`lost` are both false on a push.
#[derive(Debug, Copy, Clone, Default)]
pub struct RoundFacts {
    pub won: bool,
    pub lost: bool,
    pub blackjack: bool,
    pub card_count: usize,
    /// The bet the seat had riding this round.
    pub bet: u32,
    /// Bankroll after settlement.
    pub bankroll: u32,
    /// Live bet after settlement (0 unless called mid-round).
    pub bet_outstanding: u32,
}

/// Derives milestone unlocks from a stream of round outcomes.
#[derive(Debug, Clone, Default)]
pub struct AchievementTracker {
    unlocked: BTreeSet<Achievement>,
    win_streak: u32,
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, a: Achievement) -> bool {
        self.unlocked.contains(&a)
    }

    pub fn win_streak(&self) -> u32 {
        self.win_streak
    }

    /// Feed one round's facts; returns milestones newly unlocked by it.
    /// Idempotent per milestone: repeats never re-unlock.
    pub fn observe(&mut self, facts: RoundFacts) -> Vec<Achievement> {
        let mut fresh = Vec::new();
        if facts.won {
            self.win_streak += 1;
            self.unlock(Achievement::FirstWin, &mut fresh);
            if facts.blackjack {
                self.unlock(Achievement::Blackjack, &mut fresh);
            }
            if facts.card_count >= 5 {
                self.unlock(Achievement::FiveCardCharlie, &mut fresh);
            }
            if self.win_streak >= 3 {
                self.unlock(Achievement::Streak3, &mut fresh);
            }
        } else if facts.lost {
            self.win_streak = 0;
        }
        // pushes leave the streak untouched

        if facts.bet >= 100 {
            self.unlock(Achievement::HighRoller, &mut fresh);
        }
        if facts.bankroll == 0 && facts.bet_outstanding == 0 {
            self.unlock(Achievement::FreshStart, &mut fresh);
        }
        fresh
    }

    fn unlock(&mut self, a: Achievement, fresh: &mut Vec<Achievement>) {
        if self.unlocked.insert(a) {
            fresh.push(a);
        }
    }

    /// Persisted form: the sorted set of unlocked keys.
    pub fn unlocked_keys(&self) -> Vec<String> {
        self.unlocked.iter().map(|a| a.key().to_string()).collect()
    }

    /// Re-unlock from persisted keys; unknown keys are ignored.
    pub fn restore(&mut self, keys: &[String]) {
        for key in keys {
            if let Some(a) = Achievement::from_key(key) {
                self.unlocked.insert(a);
            }
        }
    }

    /// Explicit relock of everything, including the streak counter.
    pub fn reset(&mut self) {
        self.unlocked.clear();
        self.win_streak = 0;
    }
}
