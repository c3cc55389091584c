use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::achievements::AchievementTracker;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};

/// Key under which the unlocked-achievement list is persisted.
pub const ACHIEVEMENTS_KEY: &str = "achievements";
/// Key under which the leaderboard entry list is persisted.
pub const LEADERBOARD_KEY: &str = "leaderboard";

/// Abstract key-value persistence surviving process restarts.
///
/// Values are opaque strings; the load helpers below treat anything that
/// fails to parse as absent, so corruption is never fatal.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str) -> std::io::Result<()>;
    fn remove(&mut self, key: &str) -> std::io::Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> std::io::Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The whole map is rewritten on every put; fine for the handful of keys
/// this system persists.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open (or create on first put) the store at `path`. An unreadable
    /// or malformed file starts empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    fn flush(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(&self.path)?;
        let mut w = BufWriter::new(f);
        let raw = serde_json::to_string_pretty(&self.values).map_err(std::io::Error::other)?;
        w.write_all(raw.as_bytes())?;
        w.flush()
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> std::io::Result<()> {
        self.values.remove(key);
        self.flush()
    }
}

/// Restore a tracker from the persisted key list. Malformed state loads
/// as an empty set.
pub fn load_achievements(store: &dyn Store) -> AchievementTracker {
    let mut tracker = AchievementTracker::new();
    if let Some(raw) = store.get(ACHIEVEMENTS_KEY) {
        if let Ok(keys) = serde_json::from_str::<Vec<String>>(&raw) {
            tracker.restore(&keys);
        }
    }
    tracker
}

pub fn save_achievements(store: &mut dyn Store, tracker: &AchievementTracker) -> std::io::Result<()> {
    let raw = serde_json::to_string(&tracker.unlocked_keys()).map_err(std::io::Error::other)?;
    store.put(ACHIEVEMENTS_KEY, &raw)
}

/// Restore the leaderboard. Malformed state loads as empty.
pub fn load_leaderboard(store: &dyn Store) -> Leaderboard {
    store
        .get(LEADERBOARD_KEY)
        .and_then(|raw| serde_json::from_str::<Vec<LeaderboardEntry>>(&raw).ok())
        .map(Leaderboard::from_entries)
        .unwrap_or_default()
}

pub fn save_leaderboard(store: &mut dyn Store, board: &Leaderboard) -> std::io::Result<()> {
    let raw = serde_json::to_string(board.entries()).map_err(std::io::Error::other)?;
    store.put(LEADERBOARD_KEY, &raw)
}
