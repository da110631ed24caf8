// Game module - Contains all game logic and state management
//
// This module contains:
// - state.rs: player progress (money, income, name)
// - upgrade.rs: upgrade catalog and its cost curve
// - name_entry.rs: the name-entry text buffer
// - screen.rs: screen flow enum
// - layout.rs: positions of every button
// - types.rs: colors and floating notifications
// - session.rs: TycoonGame, which ties the above together per frame

pub mod layout;
pub mod name_entry;
pub mod screen;
pub mod session;
pub mod state;
pub mod types;
pub mod upgrade;

pub use screen::Screen;
pub use session::{SpriteFrameCounts, TycoonGame};
pub use types::*;
