//! Save manager for handling save/load operations
//!
//! This module provides the SaveManager struct which handles:
//! - Writing the snapshot (full overwrite, pretty JSON)
//! - Reading the snapshot back, treating a missing file as "no save"
//! - Deleting the snapshot on reset
//! - Autosave timing

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub const SAVE_FILE_NAME: &str = "save.json";

pub struct SaveManager {
    save_path: PathBuf,
    autosave_interval: Duration,
    since_last_save: Duration,
}

impl SaveManager {
    /// Creates a new SaveManager writing into the given directory
    ///
    /// The save directory will be created if it doesn't exist.
    pub fn new(
        save_directory: impl AsRef<Path>,
        autosave_interval: Duration,
    ) -> Result<Self, SaveError> {
        let save_dir = save_directory.as_ref();

        if !save_dir.exists() {
            fs::create_dir_all(save_dir)?;
        }

        Ok(SaveManager {
            save_path: save_dir.join(SAVE_FILE_NAME),
            autosave_interval,
            since_last_save: Duration::ZERO,
        })
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Write the snapshot, replacing whatever was there
    pub fn save_game(&mut self, save_file: &SaveFile) -> Result<PathBuf, SaveError> {
        let json = serde_json::to_string_pretty(save_file)?;
        fs::write(&self.save_path, json)?;

        self.since_last_save = Duration::ZERO;
        debug!(path = %self.save_path.display(), "game saved");

        Ok(self.save_path.clone())
    }

    /// Read the snapshot, `Ok(None)` when there is none
    pub fn load_game(&self) -> Result<Option<SaveFile>, SaveError> {
        if !self.save_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.save_path)?;
        let save_file: SaveFile = serde_json::from_str(&json)?;

        Ok(Some(save_file))
    }

    /// Remove the snapshot. Returns whether a file was actually deleted.
    pub fn delete_save(&mut self) -> Result<bool, SaveError> {
        self.since_last_save = Duration::ZERO;

        if !self.save_path.exists() {
            return Ok(false);
        }

        fs::remove_file(&self.save_path)?;
        info!(path = %self.save_path.display(), "save deleted");
        Ok(true)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Advance the autosave clock; true once the interval has elapsed
    ///
    /// The clock restarts whenever an autosave falls due, whether or not the
    /// save that follows succeeds, and on every `save_game`.
    pub fn tick_autosave(&mut self, elapsed: Duration) -> bool {
        self.since_last_save = self.since_last_save.saturating_add(elapsed);
        if self.since_last_save < self.autosave_interval {
            return false;
        }
        self.since_last_save = Duration::ZERO;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(dir: &Path) -> SaveManager {
        SaveManager::new(dir, Duration::from_secs(5)).unwrap()
    }

    fn sample() -> SaveFile {
        SaveFile {
            money: 150,
            per_click: 2,
            auto: 1,
            name: "Hanzo".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let manager = manager(&nested);
        assert!(nested.exists());
        assert_eq!(manager.path(), nested.join(SAVE_FILE_NAME));
    }

    #[test]
    fn test_load_without_save() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager(dir.path());
        assert!(!manager.save_exists());
        assert_eq!(manager.load_game().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager(dir.path());

        manager.save_game(&sample()).unwrap();
        assert!(manager.save_exists());
        assert_eq!(manager.load_game().unwrap(), Some(sample()));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager(dir.path());

        manager.save_game(&sample()).unwrap();
        let newer = SaveFile {
            money: 9,
            ..sample()
        };
        manager.save_game(&newer).unwrap();
        assert_eq!(manager.load_game().unwrap().unwrap().money, 9);
    }

    #[test]
    fn test_corrupt_save_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager(dir.path());
        fs::write(manager.path(), "{{{{").unwrap();
        assert!(matches!(
            manager.load_game(),
            Err(SaveError::Serialization(_))
        ));
    }

    #[test]
    fn test_delete_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager(dir.path());

        assert!(!manager.delete_save().unwrap());
        manager.save_game(&sample()).unwrap();
        assert!(manager.delete_save().unwrap());
        assert!(!manager.save_exists());
    }

    #[test]
    fn test_autosave_timing() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager(dir.path());

        assert!(!manager.tick_autosave(Duration::from_secs(3)));
        assert!(manager.tick_autosave(Duration::from_secs(2)));

        manager.save_game(&sample()).unwrap();
        assert!(!manager.tick_autosave(Duration::from_secs(1)));
    }

    #[test]
    fn test_autosave_waits_a_full_interval_after_failed_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager(dir.path());
        // A directory where the file should be makes every write fail
        fs::create_dir(manager.path()).unwrap();

        assert!(manager.tick_autosave(Duration::from_secs(5)));
        assert!(manager.save_game(&sample()).is_err());

        for _ in 0..4 {
            assert!(!manager.tick_autosave(Duration::from_secs(1)));
        }
        assert!(manager.tick_autosave(Duration::from_secs(1)));
    }

    #[test]
    fn test_autosave_clock_saturates() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager(dir.path());
        assert!(manager.tick_autosave(Duration::MAX));
        assert!(manager.tick_autosave(Duration::MAX));
    }
}
