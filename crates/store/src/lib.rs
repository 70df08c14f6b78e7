//! High-score persistence.
//!
//! The record is a small JSON object, `{"highest_score": <n>}`. A missing
//! file or key reads as 0. Unknown keys already in the file are carried
//! through a rewrite untouched.
//!
//! Reads never fail the game: [`HighScoreFile::load_or_default`] reports
//! problems on stderr and falls back to 0. Writes go to a sibling temp file
//! that is renamed over the record, so an interrupted save leaves the old
//! record in place.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default record location, relative to the working directory
pub const DEFAULT_SCORE_PATH: &str = "highscore.json";

/// On-disk high-score record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default)]
    pub highest_score: u32,
    /// Keys this program does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HighScoreRecord {
    pub fn new(highest_score: u32) -> Self {
        Self {
            highest_score,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record; a missing file is an empty record, not an error.
    pub fn read(&self) -> Result<HighScoreRecord> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HighScoreRecord::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", self.path.display()))
    }

    /// Write the record, creating parent directories as needed.
    pub fn write(&self, record: &HighScoreRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let text = serde_json::to_string_pretty(record)?;
        let tmp = self.temp_path();
        fs::write(&tmp, text).with_context(|| format!("writing {}", tmp.display()))?;

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e).with_context(|| format!("replacing {}", self.path.display()));
        }
        Ok(())
    }

    /// Sibling path the record is staged in before the rename
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(DEFAULT_SCORE_PATH));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Stored high score, or 0 when the record cannot be read.
    pub fn load_or_default(&self) -> u32 {
        match self.read() {
            Ok(record) => record.highest_score,
            Err(e) => {
                eprintln!("[Store] Using high score 0: {:#}", e);
                0
            }
        }
    }

    /// Persist a new high score, keeping any other keys in the file.
    pub fn save(&self, highest_score: u32) -> Result<()> {
        // An unreadable record is replaced rather than blocking the save.
        let mut record = self.read().unwrap_or_default();
        record.highest_score = highest_score;
        self.write(&record)
    }
}

impl Default for HighScoreFile {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_PATH)
    }
}
