// Screen flow: which screen is showing decides which input is accepted and
// what gets drawn each frame.

use crate::input_system::InputContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title menu; `confirm_new` is set while the "start a new game?" dialog
    /// is open on top of it
    Opening { confirm_new: bool },
    NameInput,
    MainGame,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Opening { confirm_new: false }
    }
}

impl Screen {
    pub fn title() -> Self {
        Self::default()
    }

    pub fn is_confirming_new_game(&self) -> bool {
        matches!(self, Screen::Opening { confirm_new: true })
    }

    pub fn input_context(&self) -> InputContext {
        match self {
            Screen::Opening { confirm_new: false } => InputContext::Title,
            Screen::Opening { confirm_new: true } => InputContext::ConfirmNewGame,
            Screen::NameInput => InputContext::NameEntry,
            Screen::MainGame => InputContext::Playing,
        }
    }
}
