// Player progress: currency, income rates and the player's name.
//
// Money only ever goes down through `spend`, which refuses when funds are
// short, so it can never underflow.

use crate::save::{SaveFile, Saveable};

/// Per-click income a fresh game starts with
pub const STARTING_PER_CLICK: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub money: u64,
    pub per_click: u64,
    pub auto: u64,
    pub name: String,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            money: 0,
            per_click: STARTING_PER_CLICK,
            auto: 0,
            name: String::new(),
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant one click's worth of money and return the amount
    pub fn click(&mut self) -> u64 {
        self.money = self.money.saturating_add(self.per_click);
        self.per_click
    }

    pub fn can_afford(&self, cost: u64) -> bool {
        self.money >= cost
    }

    /// Deduct `cost` if there is enough money. Nothing changes otherwise.
    pub fn spend(&mut self, cost: u64) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.money -= cost;
        true
    }

    /// Pay out auto income for `seconds` whole seconds
    pub fn accrue_auto(&mut self, seconds: u64) -> u64 {
        let gain = self.auto.saturating_mul(seconds);
        self.money = self.money.saturating_add(gain);
        gain
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when nothing has happened worth saving
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl Saveable for GameState {
    fn write_save(&self, save: &mut SaveFile) {
        save.money = self.money;
        save.per_click = self.per_click;
        save.auto = self.auto;
        save.name = self.name.clone();
    }

    fn read_save(&mut self, save: &SaveFile) {
        self.money = save.money;
        self.per_click = save.per_click;
        self.auto = save.auto;
        self.name = save.name.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = GameState::new();
        assert_eq!(state.money, 0);
        assert_eq!(state.per_click, 1);
        assert_eq!(state.auto, 0);
        assert_eq!(state.name, "");
        assert!(state.is_pristine());
    }

    #[test]
    fn test_click_adds_per_click() {
        let mut state = GameState::new();
        state.per_click = 4;
        assert_eq!(state.click(), 4);
        assert_eq!(state.click(), 4);
        assert_eq!(state.money, 8);
    }

    #[test]
    fn test_spend_requires_funds() {
        let mut state = GameState::new();
        state.money = 19;
        assert!(!state.spend(20));
        assert_eq!(state.money, 19);

        state.money = 20;
        assert!(state.spend(20));
        assert_eq!(state.money, 0);
    }

    #[test]
    fn test_accrue_auto() {
        let mut state = GameState::new();
        state.auto = 6;
        assert_eq!(state.accrue_auto(3), 18);
        assert_eq!(state.money, 18);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = GameState {
            money: 500,
            per_click: 7,
            auto: 11,
            name: "Yuki".to_string(),
        };
        state.reset();
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_has_name_ignores_whitespace() {
        let mut state = GameState::new();
        state.name = "   ".to_string();
        assert!(!state.has_name());
        state.name = " Rin ".to_string();
        assert!(state.has_name());
    }

    #[test]
    fn test_save_fields() {
        let state = GameState {
            money: 12,
            per_click: 3,
            auto: 5,
            name: "Aki".to_string(),
        };
        let mut save = SaveFile::default();
        state.write_save(&mut save);

        let mut restored = GameState::new();
        restored.read_save(&save);
        assert_eq!(restored, state);
    }
}
