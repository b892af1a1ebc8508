//! Thread-safe holders of the oldest and newest match seen so far.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

use crate::find::Find;

/// 1980-02-01T00:00:00Z. Machines without a real-time clock stamp files with
/// 1980-01-01, so the whole of January is treated as unknown.
const DOS_EPOCH_SECS: i64 = 318_211_200;

/// True when `time` predates the MS-DOS epoch and can't be trusted.
pub fn dos_epoch(time: &DateTime<Utc>) -> bool {
    time.timestamp() < DOS_EPOCH_SECS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Oldest,
    Newest,
}

impl Extreme {
    pub fn label(&self) -> &'static str {
        match self {
            Extreme::Oldest => "Oldest found match:",
            Extreme::Newest => "Newest found match:",
        }
    }

    fn wins(&self, candidate: &DateTime<Utc>, held: &DateTime<Utc>) -> bool {
        match self {
            Extreme::Oldest => candidate < held,
            Extreme::Newest => candidate > held,
        }
    }
}

/// The best candidate so far: the count it was printed with and the directory
/// or archive that holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub count: usize,
    pub path: PathBuf,
    pub find: Find,
}

#[derive(Debug)]
pub struct Tracker {
    extreme: Extreme,
    best: Mutex<Option<Match>>,
}

impl Tracker {
    pub fn new(extreme: Extreme) -> Self {
        Self {
            extreme,
            best: Mutex::new(None),
        }
    }

    pub fn oldest() -> Self {
        Self::new(Extreme::Oldest)
    }

    pub fn newest() -> Self {
        Self::new(Extreme::Newest)
    }

    pub fn extreme(&self) -> Extreme {
        self.extreme
    }

    /// Offer a candidate, returning whether it replaced the held match.
    ///
    /// Candidates without a name or timestamp, or stamped before the DOS
    /// epoch, are ignored. Ties keep the match seen first.
    pub fn update(&self, count: usize, path: &Path, find: &Find) -> bool {
        let Some(modified) = find.modified.as_ref() else {
            return false;
        };
        if find.name.is_empty() || dos_epoch(modified) {
            return false;
        }

        let mut best = self.best.lock();
        let replace = match best.as_ref().and_then(|m| m.find.modified.as_ref()) {
            None => true,
            Some(held) => self.extreme.wins(modified, held),
        };
        if replace {
            *best = Some(Match {
                count,
                path: path.to_path_buf(),
                find: find.clone(),
            });
        }
        replace
    }

    pub fn get(&self) -> Option<Match> {
        self.best.lock().clone()
    }
}

/// The oldest and newest trackers of one run.
#[derive(Debug)]
pub struct Extremes {
    pub oldest: Tracker,
    pub newest: Tracker,
}

impl Extremes {
    pub fn new() -> Self {
        Self {
            oldest: Tracker::oldest(),
            newest: Tracker::newest(),
        }
    }
}

impl Default for Extremes {
    fn default() -> Self {
        Self::new()
    }
}
