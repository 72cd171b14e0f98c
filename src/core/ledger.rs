//! Per-locale content hashes of exported output.
//!
//! The ledger is a single JSON file mapping each locale to the hash of its
//! exported files and the time that hash last changed:
//!
//! ```json
//! {
//!   "en": { "hash": "9f86d0…", "last_updated": "2026-10-19T08:30:00.000Z" }
//! }
//! ```
//!
//! Clients poll it to decide whether to refetch a locale's resources.
//!
//! The file is read, modified and written back without locking. Two
//! exports running against the same ledger at the same time can lose an
//! update.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use super::error::ExportError;
use super::scanner::to_slash_path;
use super::writer::write_json;

pub const DEFAULT_LEDGER_FILE_NAME: &str = "versions.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub hash: String,
    pub last_updated: String,
}

/// Locale → record, kept as raw JSON so entries this tool did not write
/// (or cannot read) are carried over untouched.
pub type VersionRecords = Map<String, Value>;

/// What `update` did to a locale's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOutcome {
    /// The locale had no record yet.
    Created,
    /// The hash differs from the stored one; timestamp refreshed.
    Changed,
    /// Same hash; record left untouched.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerUpdate {
    pub locale: String,
    pub hash: String,
    pub outcome: LedgerOutcome,
    /// The existing ledger file could not be parsed and was replaced.
    pub replaced_invalid: bool,
}

/// Result of reading the ledger file.
#[derive(Debug, Default)]
pub struct LoadedLedger {
    pub records: VersionRecords,
    /// True when a file existed but was not a JSON object.
    pub invalid: bool,
}

impl LoadedLedger {
    /// The stored hash for `locale`, if its entry has a string `hash`.
    pub fn stored_hash(&self, locale: &str) -> Option<&str> {
        self.records.get(locale)?.get("hash")?.as_str()
    }

    /// The entry for `locale`, if it has the full record shape.
    pub fn record(&self, locale: &str) -> Option<VersionRecord> {
        serde_json::from_value(self.records.get(locale)?.clone()).ok()
    }
}

pub struct Ledger {
    path: PathBuf,
    output_root: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            output_root: output_root.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the ledger. A missing file, or one whose root is not a JSON
    /// object, yields no records. Entries are not validated here.
    pub fn load(&self) -> Result<LoadedLedger, ExportError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LoadedLedger::default()),
            Err(source) => {
                return Err(ExportError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        Ok(match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(records)) => LoadedLedger {
                records,
                invalid: false,
            },
            Ok(_) | Err(_) => LoadedLedger {
                records: VersionRecords::new(),
                invalid: true,
            },
        })
    }

    /// SHA-256 over the bytes of every file under `<output_root>/<locale>`,
    /// visited in sorted relative-path order. Empty when the directory does
    /// not exist.
    pub fn compute_hash(&self, locale: &str) -> Result<String, ExportError> {
        let dir = self.output_root.join(locale);
        if !dir.is_dir() {
            return Ok(String::new());
        }

        let mut files: Vec<(String, PathBuf)> = Vec::new();
        for entry in WalkDir::new(&dir) {
            let entry = entry.map_err(|e| ExportError::Read {
                path: dir.clone(),
                source: io::Error::from(e),
            })?;
            if !entry.file_type().is_file() || entry.path() == self.path {
                continue;
            }
            let relative = entry.path().strip_prefix(&dir).unwrap_or(entry.path());
            files.push((to_slash_path(relative), entry.path().to_path_buf()));
        }
        files.sort();

        let mut hasher = Sha256::new();
        for (_, path) in &files {
            let bytes = fs::read(path).map_err(|source| ExportError::Read {
                path: path.clone(),
                source,
            })?;
            hasher.update(&bytes);
        }

        Ok(hex::encode(hasher.finalize()))
    }

    /// Refresh the record for `locale` using the current time.
    pub fn update(&self, locale: &str) -> Result<LedgerUpdate, ExportError> {
        self.update_at(locale, Utc::now())
    }

    /// Refresh the record for `locale`; `now` becomes `last_updated` if the
    /// hash changed or the locale had no record.
    pub fn update_at(&self, locale: &str, now: DateTime<Utc>) -> Result<LedgerUpdate, ExportError> {
        let mut loaded = self.load()?;
        let hash = self.compute_hash(locale)?;

        let outcome = if !loaded.records.contains_key(locale) {
            LedgerOutcome::Created
        } else if loaded.stored_hash(locale) == Some(hash.as_str()) {
            LedgerOutcome::Unchanged
        } else {
            LedgerOutcome::Changed
        };

        if outcome != LedgerOutcome::Unchanged {
            let record = VersionRecord {
                hash: hash.clone(),
                last_updated: format_timestamp(now),
            };
            let value = serde_json::to_value(&record).map_err(|source| ExportError::Serialize {
                path: self.path.clone(),
                source,
            })?;
            loaded.records.insert(locale.to_string(), value);
        }

        write_json(&self.path, &loaded.records)?;

        Ok(LedgerUpdate {
            locale: locale.to_string(),
            hash,
            outcome,
            replaced_invalid: loaded.invalid,
        })
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2026-10-19T08:30:00.000Z`.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
