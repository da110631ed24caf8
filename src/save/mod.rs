//! Save/Load system for Click Tycoon
//!
//! - `types`: the snapshot record and error type
//! - `manager`: SaveManager for file operations and autosave timing
//! - `saveable`: Saveable trait for the parts of the game that persist
//!
//! # Example Usage
//!
//! ```ignore
//! let mut save_manager = SaveManager::new("~/.click_tycoon", Duration::from_secs(5))?;
//!
//! let mut save = SaveFile::default();
//! state.write_save(&mut save);
//! save_manager.save_game(&save)?;
//!
//! if let Some(save) = save_manager.load_game()? {
//!     state.read_save(&save);
//! }
//! ```

pub mod manager;
pub mod saveable;
pub mod types;

pub use manager::SaveManager;
pub use saveable::Saveable;
pub use types::*;
