//! Leaderboard store - append-only local score history
//!
//! The backing store is an injected capability ([`ScoreStore`]) so the game
//! can run against a JSON file on disk, or purely in memory in tests and
//! when storage is unavailable. Entries are never edited or deleted and
//! names are not deduplicated; ranking happens at read time.
//!
//! Writes follow a whole-collection read-modify-write: load the full list,
//! append, save the full list. That is what keeps two windows on the same
//! file from losing each other's scores.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::LEADERBOARD_TOP;

/// On-disk schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Default leaderboard file name
pub const DEFAULT_STORE_FILE: &str = "snake_leaderboard.json";

/// Name used when the player submits a blank one
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// One recorded game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub date: DateTime<Utc>,
}

/// Persistence capability for the entry collection
pub trait ScoreStore {
    fn load(&self) -> Result<Vec<LeaderboardEntry>>;
    fn save(&mut self, entries: &[LeaderboardEntry]) -> Result<()>;
}

/// In-memory store, used by tests and as the degraded fallback
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<LeaderboardEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Vec<LeaderboardEntry>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[LeaderboardEntry]) -> Result<()> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

/// Versioned JSON envelope written to disk
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    entries: Vec<LeaderboardEntry>,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<Vec<LeaderboardEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let file: StoreFile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        if file.version != SCHEMA_VERSION {
            bail!(
                "unsupported leaderboard schema version {} in {}",
                file.version,
                self.path.display()
            );
        }
        Ok(file.entries)
    }

    fn save(&mut self, entries: &[LeaderboardEntry]) -> Result<()> {
        let file = StoreFile {
            version: SCHEMA_VERSION,
            entries: entries.to_vec(),
        };
        let raw = serde_json::to_string_pretty(&file).context("encoding leaderboard")?;
        fs::write(&self.path, raw).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

/// The leaderboard itself: an injected store plus an in-session cache.
///
/// Any store failure flips the board into degraded mode: scores keep
/// accumulating in memory for the session and the game never crashes.
pub struct Leaderboard {
    store: Box<dyn ScoreStore>,
    cache: Vec<LeaderboardEntry>,
    degraded: bool,
}

impl Leaderboard {
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        let (cache, degraded) = match store.load() {
            Ok(entries) => (entries, false),
            Err(_) => (Vec::new(), true),
        };
        Self {
            store,
            cache,
            degraded,
        }
    }

    /// Open the default JSON-file-backed leaderboard
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(JsonFileStore::new(path)))
    }

    /// True when persistence failed and entries live only in this session
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Record a finished game.
    ///
    /// Blank or whitespace names fall back to [`DEFAULT_PLAYER_NAME`]. The
    /// append re-reads the persisted collection first (read-modify-write)
    /// so concurrent writers do not lose entries.
    pub fn record(&mut self, name: &str, score: u32) {
        let name = name.trim();
        let entry = LeaderboardEntry {
            name: if name.is_empty() {
                DEFAULT_PLAYER_NAME.to_string()
            } else {
                name.to_string()
            },
            score,
            date: Utc::now(),
        };

        if !self.degraded {
            match self.store.load() {
                Ok(latest) => self.cache = latest,
                Err(_) => self.degraded = true,
            }
        }

        self.cache.push(entry);

        if !self.degraded && self.store.save(&self.cache).is_err() {
            self.degraded = true;
        }
    }

    /// Top `n` entries, descending by score; ties keep insertion order
    pub fn top(&self, n: usize) -> Vec<LeaderboardEntry> {
        let mut ranked = self.cache.clone();
        // Stable sort: equal scores stay in insertion order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(n);
        ranked
    }

    /// The default display slice
    pub fn top_default(&self) -> Vec<LeaderboardEntry> {
        self.top(LEADERBOARD_TOP)
    }
}
