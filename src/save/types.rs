//! Save data types for Click Tycoon
//!
//! The snapshot is a single flat JSON record. Missing fields fall back to
//! their defaults so a hand-written four-field record still loads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// The persisted snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveFile {
    #[serde(alias = "currency")]
    pub money: u64,
    pub per_click: u64,
    pub auto: u64,
    pub name: String,
    /// Upgrade name -> purchase level
    pub upgrade_levels: BTreeMap<String, u32>,
    /// RFC 3339 local time of the last write
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl Default for SaveFile {
    fn default() -> Self {
        SaveFile {
            money: 0,
            per_click: 1,
            auto: 0,
            name: String::new(),
            upgrade_levels: BTreeMap::new(),
            saved_at: None,
        }
    }
}

impl SaveFile {
    /// Human-readable form of `saved_at`, e.g. `2026-10-18 14:05`
    pub fn saved_at_label(&self) -> Option<String> {
        let stamp = self.saved_at.as_deref()?;
        chrono::DateTime::parse_from_rfc3339(stamp)
            .ok()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
    }
}

/// Error types for save/load operations
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
