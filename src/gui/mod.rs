//! Screen-Space GUI System
//!
//! Elements drawn at fixed screen positions, on top of everything else.
//!
//! # Available Components
//!
//! - [`Button`] - clickable labelled rectangle with optional artwork
//! - [`ConfirmDialog`] - "start a new game?" overlay
//! - `title_screen`, `name_entry_screen`, `game_screen` - one draw routine
//!   per screen of the game
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{Button, ButtonSkin};
//!
//! let quit = Button::new(350, 500, 300, 80, ButtonSkin::Red, "QUIT", WHITE);
//! if quit.is_clicked(x, y) { /* ... */ }
//! quit.render(&mut canvas, textures.button(quit.skin), hovered)?;
//! ```

pub mod button;
pub mod confirm_dialog;
pub mod game_screen;
pub mod name_entry_screen;
pub mod title_screen;

pub use button::{Button, ButtonSkin};
pub use confirm_dialog::ConfirmDialog;
