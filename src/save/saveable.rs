//! Saveable trait for game parts that live in the snapshot
//!
//! Each part writes its own fields into the shared `SaveFile` and reads them
//! back, so the snapshot stays one flat record while the owners of the data
//! stay separate.

use super::types::SaveFile;

pub trait Saveable {
    /// Copy this part's fields into the snapshot
    fn write_save(&self, save: &mut SaveFile);

    /// Restore this part's fields from the snapshot
    fn read_save(&mut self, save: &SaveFile);
}
