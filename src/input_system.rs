use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Actions the player can perform in the game
///
/// This enum represents all high-level actions input can trigger. It
/// decouples SDL2 events from the game logic that reacts to them.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    // === Pointer ===
    LeftClick(i32, i32),
    MouseMove(i32, i32),

    // === Name Entry ===
    TypeText(String),
    Backspace,
    SubmitName,

    // === Menus ===
    /// Close the new-game confirmation without resetting
    Cancel,

    // === System ===
    /// Window closed
    Quit,
}

/// Input context determines which actions are available
///
/// Follows the current screen, so keys only do something where they mean
/// something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Title menu
    Title,
    /// Title menu with the new-game confirmation open
    ConfirmNewGame,
    /// Typing a name
    NameEntry,
    /// Main game screen
    Playing,
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// Input processing happens in phases:
/// 1. The game loop sets the InputContext from the current screen
/// 2. SDL2 events are polled
/// 3. Each event is translated to a GameAction for that context, or dropped
/// 4. The actions go back to the game loop for execution
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Title,
        }
    }

    pub fn set_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Poll all pending SDL2 events and convert them to GameActions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(event))
            .collect()
    }

    /// Translate a single event for the current context
    pub fn translate(&self, event: Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => self.handle_keydown(key),
            Event::TextInput { text, .. } => self.handle_text(text),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(GameAction::LeftClick(x, y)),
            Event::MouseMotion { x, y, .. } => Some(GameAction::MouseMove(x, y)),
            _ => None,
        }
    }

    /// Routes key presses to context-specific handlers
    fn handle_keydown(&self, key: Keycode) -> Option<GameAction> {
        match self.context {
            InputContext::NameEntry => Self::handle_name_entry_keys(key),
            InputContext::ConfirmNewGame => Self::handle_confirm_keys(key),
            InputContext::Title | InputContext::Playing => None,
        }
    }

    fn handle_name_entry_keys(key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::Return | Keycode::KpEnter => Some(GameAction::SubmitName),
            Keycode::Backspace => Some(GameAction::Backspace),
            _ => None,
        }
    }

    fn handle_confirm_keys(key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::Escape => Some(GameAction::Cancel),
            _ => None,
        }
    }

    /// Typed text only matters while entering a name
    fn handle_text(&self, text: String) -> Option<GameAction> {
        match self.context {
            InputContext::NameEntry => Some(GameAction::TypeText(text)),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
