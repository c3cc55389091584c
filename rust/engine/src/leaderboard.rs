use serde::{Deserialize, Serialize};

/// A bankroll snapshot published when a seat leaves the table.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub bankroll: u32,
}

/// Append-only list of published bankrolls. Only an explicit [`clear`]
/// removes entries.
///
/// [`clear`]: Leaderboard::clear
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, name: impl Into<String>, bankroll: u32) -> LeaderboardEntry {
        let entry = LeaderboardEntry {
            name: name.into(),
            bankroll,
        };
        self.entries.push(entry.clone());
        entry
    }

    /// Insertion order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Display order: highest bankroll first.
    pub fn sorted_desc(&self) -> Vec<LeaderboardEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.bankroll.cmp(&a.bankroll));
        sorted
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
