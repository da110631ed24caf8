//! The running game
//!
//! `TycoonGame` owns everything that changes while playing: the player's
//! progress, the upgrade catalog, the current screen, the name being typed,
//! notifications, queued sound cues and the sprite timelines. It never
//! touches SDL resources, so the whole flow can be driven from tests with
//! `handle_action` and `update`.

use super::layout::Layout;
use super::name_entry::NameEntry;
use super::screen::Screen;
use super::state::GameState;
use super::types::{BRIGHT_GREEN, FloatingTextInstance, RED, YELLOW};
use super::upgrade::{PurchaseOutcome, UpgradeCatalog};
use crate::animation::{AnimationState, AnimationTimeline, BAMBOO_FRAME_SPEED, NINJA_FRAME_SPEED};
use crate::audio::SoundCue;
use crate::input_system::GameAction;
use crate::save::{SaveError, SaveFile, SaveManager, Saveable};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Where purchase notifications appear
const PURCHASE_TEXT_POS: (f32, f32) = (500.0, 740.0);
const BROKE_TEXT_POS: (f32, f32) = (400.0, 700.0);

/// Frame counts for each sprite's animations, taken from the loaded textures
#[derive(Debug, Clone, Default)]
pub struct SpriteFrameCounts {
    pub ninja: HashMap<AnimationState, usize>,
    pub bamboo: HashMap<AnimationState, usize>,
}

pub struct TycoonGame {
    state: GameState,
    upgrades: UpgradeCatalog,
    screen: Screen,
    name_entry: NameEntry,
    layout: Layout,
    notifications: Vec<FloatingTextInstance>,
    sound_queue: Vec<SoundCue>,
    ninja: AnimationTimeline,
    bamboo: AnimationTimeline,
    save_manager: SaveManager,
    save_exists: bool,
    last_saved_label: Option<String>,
    auto_timer: f32,
    mouse_position: (i32, i32),
    should_quit: bool,
}

impl TycoonGame {
    /// Create the game on the title screen, picking up an existing save
    pub fn new(save_manager: SaveManager, frame_counts: &SpriteFrameCounts) -> Self {
        let upgrades = UpgradeCatalog::standard();
        let layout = Layout::standard(upgrades.len());

        let mut game = TycoonGame {
            state: GameState::new(),
            upgrades,
            screen: Screen::title(),
            name_entry: NameEntry::new(),
            layout,
            notifications: Vec::new(),
            sound_queue: Vec::new(),
            ninja: timeline(NINJA_FRAME_SPEED, &frame_counts.ninja),
            bamboo: timeline(BAMBOO_FRAME_SPEED, &frame_counts.bamboo),
            save_manager,
            save_exists: false,
            last_saved_label: None,
            auto_timer: 0.0,
            mouse_position: (0, 0),
            should_quit: false,
        };

        game.save_exists = game.read_snapshot();
        if game.save_exists {
            info!(name = %game.state.name, money = game.state.money, "found existing save");
        } else {
            info!("no existing save found");
        }

        game
    }

    // === Accessors ===

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn upgrades(&self) -> &UpgradeCatalog {
        &self.upgrades
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn name_buffer(&self) -> &str {
        self.name_entry.as_str()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn notifications(&self) -> &[FloatingTextInstance] {
        &self.notifications
    }

    pub fn ninja(&self) -> &AnimationTimeline {
        &self.ninja
    }

    pub fn bamboo(&self) -> &AnimationTimeline {
        &self.bamboo
    }

    pub fn save_exists(&self) -> bool {
        self.save_exists
    }

    /// When the save on disk was written, for the title screen
    pub fn last_saved_label(&self) -> Option<&str> {
        self.last_saved_label.as_deref()
    }

    pub fn mouse_position(&self) -> (i32, i32) {
        self.mouse_position
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Take the sound cues queued since the last call
    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sound_queue)
    }

    // === Input ===

    pub fn handle_action(&mut self, action: GameAction) {
        match action {
            GameAction::LeftClick(x, y) => self.handle_click(x, y),
            GameAction::MouseMove(x, y) => self.mouse_position = (x, y),
            GameAction::TypeText(text) => {
                if self.screen == Screen::NameInput {
                    self.name_entry.push_str(&text);
                }
            }
            GameAction::Backspace => {
                if self.screen == Screen::NameInput {
                    self.name_entry.backspace();
                }
            }
            GameAction::SubmitName => self.submit_name(),
            GameAction::Cancel => {
                if self.screen.is_confirming_new_game() {
                    self.screen = Screen::title();
                }
            }
            GameAction::Quit => self.quit(),
        }
    }

    fn handle_click(&mut self, x: i32, y: i32) {
        match self.screen {
            Screen::Opening { confirm_new: true } => {
                if self.layout.confirm_yes.is_clicked(x, y) {
                    self.start_new_game();
                } else if self.layout.confirm_no.is_clicked(x, y) {
                    self.screen = Screen::title();
                }
            }
            Screen::Opening { confirm_new: false } => {
                if self.layout.new_game.is_clicked(x, y) {
                    self.screen = Screen::Opening { confirm_new: true };
                } else if self.layout.load_game.is_clicked(x, y) {
                    self.load_game();
                } else if self.layout.quit.is_clicked(x, y) {
                    self.quit();
                }
            }
            Screen::NameInput => {}
            Screen::MainGame => {
                if self.layout.slash.is_clicked(x, y) {
                    self.slash(x, y);
                } else if self.layout.reset.is_clicked(x, y) {
                    self.reset();
                } else if let Some(index) = self.layout.upgrade_at(x, y) {
                    self.buy_upgrade(index);
                }
            }
        }
    }

    // === Screen Flow ===

    /// Confirmed "new game": wipe everything and ask for a name
    fn start_new_game(&mut self) {
        self.wipe();
        self.screen = Screen::NameInput;
        info!("starting a new game");
    }

    /// Reload the save from disk and continue from it
    ///
    /// Does nothing when there is no save. A save without a name goes to
    /// name entry first.
    pub fn load_game(&mut self) {
        if !self.save_exists {
            warn!("no save file found, cannot load");
            return;
        }

        if !self.read_snapshot() {
            self.save_exists = false;
            return;
        }

        self.notifications.clear();
        self.auto_timer = 0.0;
        if self.state.has_name() {
            self.screen = Screen::MainGame;
            info!(name = %self.state.name, "game loaded");
        } else {
            self.name_entry = NameEntry::with_name(&self.state.name);
            self.screen = Screen::NameInput;
            info!("loaded save has no name, asking for one");
        }
    }

    fn submit_name(&mut self) {
        if self.screen != Screen::NameInput {
            return;
        }
        let Some(name) = self.name_entry.committed_name() else {
            debug!("name is blank, staying on name entry");
            return;
        };

        self.state.name = name;
        self.persist();
        self.auto_timer = 0.0;
        self.screen = Screen::MainGame;
        info!(name = %self.state.name, "welcome");
    }

    /// Discard the save and all progress, back to the title screen
    pub fn reset(&mut self) {
        self.wipe();
        self.screen = Screen::title();
        info!("game reset");
    }

    /// Save (unless there is nothing to keep) and stop the game loop
    pub fn quit(&mut self) {
        if self.state.is_pristine() && self.upgrades.is_pristine() {
            debug!("nothing to save on exit");
        } else {
            self.persist();
        }
        self.should_quit = true;
    }

    fn wipe(&mut self) {
        if let Err(e) = self.save_manager.delete_save() {
            error!("failed to delete save: {}", e);
        }
        self.save_exists = self.save_manager.save_exists();
        self.last_saved_label = None;
        self.state.reset();
        self.upgrades.reset_levels();
        self.name_entry.clear();
        self.notifications.clear();
        self.auto_timer = 0.0;
        self.ninja.reset();
        self.bamboo.reset();
    }

    // === Gameplay ===

    fn slash(&mut self, x: i32, y: i32) {
        let amount = self.state.click();
        self.notifications
            .push(FloatingTextInstance::new(format!("+{}", amount), x as f32, y as f32, YELLOW));
        self.ninja.play(AnimationState::Slash, true);
        self.bamboo.play(AnimationState::Slash, true);
        self.sound_queue.push(SoundCue::Slash);
        self.sound_queue.push(SoundCue::Coin);
    }

    /// Try to buy the upgrade at `index`; either outcome shows a notification
    pub fn buy_upgrade(&mut self, index: usize) {
        let Some(outcome) = self.upgrades.purchase(index, &mut self.state) else {
            return;
        };

        match outcome {
            PurchaseOutcome::Purchased { name, cost } => {
                debug!(upgrade = name, cost, "upgrade purchased");
                let (x, y) = PURCHASE_TEXT_POS;
                self.notifications
                    .push(FloatingTextInstance::new(format!("{} +", name), x, y, BRIGHT_GREEN));
                self.sound_queue.push(SoundCue::Purchase);
            }
            PurchaseOutcome::InsufficientFunds { name, cost } => {
                debug!(upgrade = name, cost, money = self.state.money, "not enough money");
                let (x, y) = BROKE_TEXT_POS;
                self.notifications
                    .push(FloatingTextInstance::new("Not enough gold!", x, y, RED));
            }
        }
    }

    /// Advance timers by one frame
    pub fn update(&mut self, delta_time: f32) {
        for notification in &mut self.notifications {
            notification.update(delta_time);
        }
        self.notifications.retain(|n| n.is_alive());

        if self.screen != Screen::MainGame {
            return;
        }

        // Whole seconds pay out; the fraction carries over to the next frame
        self.auto_timer += delta_time;
        if self.auto_timer >= 1.0 {
            let seconds = self.auto_timer.floor();
            self.auto_timer -= seconds;
            self.state.accrue_auto(seconds as u64);
        }

        self.ninja.update(delta_time);
        self.bamboo.update(delta_time);

        if self
            .save_manager
            .tick_autosave(frame_time(delta_time))
        {
            self.persist();
        }
    }

    // === Persistence ===

    fn snapshot(&self) -> SaveFile {
        let mut save = SaveFile::default();
        self.state.write_save(&mut save);
        self.upgrades.write_save(&mut save);
        save.saved_at = Some(chrono::Local::now().to_rfc3339());
        save
    }

    /// Write the snapshot now
    pub fn save(&mut self) -> Result<(), SaveError> {
        let save = self.snapshot();
        self.save_manager.save_game(&save)?;
        self.save_exists = true;
        self.last_saved_label = save.saved_at_label();
        Ok(())
    }

    /// `save`, logging instead of failing
    fn persist(&mut self) {
        if let Err(e) = self.save() {
            error!("failed to save game: {}", e);
        }
    }

    /// Replace state and upgrade levels with the save on disk.
    /// Returns whether a save was read.
    fn read_snapshot(&mut self) -> bool {
        match self.save_manager.load_game() {
            Ok(Some(save)) => {
                self.state.read_save(&save);
                self.upgrades.read_save(&save);
                self.last_saved_label = save.saved_at_label();
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("ignoring unreadable save: {}", e);
                false
            }
        }
    }
}

/// Frame delta as a `Duration`; a delta too large to represent saturates
fn frame_time(delta_time: f32) -> Duration {
    Duration::try_from_secs_f32(delta_time.max(0.0)).unwrap_or(Duration::MAX)
}

fn timeline(frame_speed: f32, counts: &HashMap<AnimationState, usize>) -> AnimationTimeline {
    counts
        .iter()
        .fold(AnimationTimeline::new(frame_speed), |timeline, (&state, &count)| {
            timeline.with_frames(state, count)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn new_game(dir: &TempDir) -> TycoonGame {
        let manager = SaveManager::new(dir.path(), Duration::from_secs(5)).unwrap();
        TycoonGame::new(manager, &SpriteFrameCounts::default())
    }

    fn click(game: &mut TycoonGame, rect: sdl2::rect::Rect) {
        let center = rect.center();
        game.handle_action(GameAction::LeftClick(center.x(), center.y()));
    }

    fn type_name(game: &mut TycoonGame, name: &str) {
        game.handle_action(GameAction::TypeText(name.to_string()));
        game.handle_action(GameAction::SubmitName);
    }

    /// Title -> confirm -> name entry -> main game
    fn start_playing(game: &mut TycoonGame, name: &str) {
        let new_game = game.layout().new_game.rect;
        click(game, new_game);
        let yes = game.layout().confirm_yes.rect;
        click(game, yes);
        type_name(game, name);
        assert_eq!(game.screen(), Screen::MainGame);
    }

    fn write_save(dir: &TempDir, save: &SaveFile) {
        let mut manager = SaveManager::new(dir.path(), Duration::from_secs(5)).unwrap();
        manager.save_game(save).unwrap();
    }

    #[test]
    fn test_fresh_start() {
        let dir = tempfile::tempdir().unwrap();
        let game = new_game(&dir);
        assert_eq!(game.screen(), Screen::title());
        assert!(!game.save_exists());
        assert_eq!(*game.state(), GameState::default());
    }

    #[test]
    fn test_new_game_confirmation_cancel() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);

        let new_game = game.layout().new_game.rect;
        click(&mut game, new_game);
        assert_eq!(game.screen(), Screen::Opening { confirm_new: true });

        let no = game.layout().confirm_no.rect;
        click(&mut game, no);
        assert_eq!(game.screen(), Screen::title());

        click(&mut game, new_game);
        game.handle_action(GameAction::Cancel);
        assert_eq!(game.screen(), Screen::title());
    }

    #[test]
    fn test_confirmation_blocks_title_buttons() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        let new_game = game.layout().new_game.rect;
        click(&mut game, new_game);

        // Title buttons under the dialog don't respond
        let load = game.layout().load_game.rect;
        click(&mut game, load);
        assert!(!game.should_quit());
        assert_eq!(game.screen(), Screen::Opening { confirm_new: true });
    }

    #[test]
    fn test_new_game_discards_existing_save() {
        let dir = tempfile::tempdir().unwrap();
        write_save(&dir, &SaveFile { money: 900, name: "Old".to_string(), ..Default::default() });
        let mut game = new_game(&dir);
        assert!(game.save_exists());

        let new_game = game.layout().new_game.rect;
        click(&mut game, new_game);
        let yes = game.layout().confirm_yes.rect;
        click(&mut game, yes);

        assert_eq!(game.screen(), Screen::NameInput);
        assert_eq!(*game.state(), GameState::default());
        assert!(!game.save_exists());
        assert_eq!(game.name_buffer(), "");
    }

    #[test]
    fn test_blank_name_blocks_game() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        let new_game = game.layout().new_game.rect;
        click(&mut game, new_game);
        let yes = game.layout().confirm_yes.rect;
        click(&mut game, yes);

        type_name(&mut game, "   ");
        assert_eq!(game.screen(), Screen::NameInput);

        game.handle_action(GameAction::Backspace);
        game.handle_action(GameAction::Backspace);
        game.handle_action(GameAction::Backspace);
        type_name(&mut game, " Kenji ");
        assert_eq!(game.screen(), Screen::MainGame);
        assert_eq!(game.state().name, "Kenji");
    }

    #[test]
    fn test_name_commit_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        start_playing(&mut game, "Aiko");

        assert!(game.save_exists());
        let manager = SaveManager::new(dir.path(), Duration::from_secs(5)).unwrap();
        let saved = manager.load_game().unwrap().unwrap();
        assert_eq!(saved.name, "Aiko");
        assert!(saved.saved_at.is_some());
    }

    #[test]
    fn test_load_without_save_does_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        let load = game.layout().load_game.rect;
        click(&mut game, load);
        assert_eq!(game.screen(), Screen::title());
    }

    #[test]
    fn test_load_named_save_goes_to_game() {
        let dir = tempfile::tempdir().unwrap();
        let mut levels = std::collections::BTreeMap::new();
        levels.insert("Katana".to_string(), 2);
        write_save(
            &dir,
            &SaveFile {
                money: 300,
                per_click: 3,
                auto: 1,
                name: "Hanzo".to_string(),
                upgrade_levels: levels,
                saved_at: None,
            },
        );

        let mut game = new_game(&dir);
        let load = game.layout().load_game.rect;
        click(&mut game, load);

        assert_eq!(game.screen(), Screen::MainGame);
        assert_eq!(game.state().money, 300);
        assert_eq!(game.state().per_click, 3);
        assert_eq!(game.upgrades().get(0).unwrap().cost(), 45);
    }

    #[test]
    fn test_load_unnamed_save_asks_for_name() {
        let dir = tempfile::tempdir().unwrap();
        write_save(&dir, &SaveFile { money: 50, ..Default::default() });

        let mut game = new_game(&dir);
        let load = game.layout().load_game.rect;
        click(&mut game, load);
        assert_eq!(game.screen(), Screen::NameInput);

        type_name(&mut game, "Ren");
        assert_eq!(game.screen(), Screen::MainGame);
        assert_eq!(game.state().money, 50);
    }

    #[test]
    fn test_corrupt_save_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path(), Duration::from_secs(5)).unwrap();
        std::fs::write(manager.path(), "not json").unwrap();

        let game = TycoonGame::new(manager, &SpriteFrameCounts::default());
        assert!(!game.save_exists());
        assert_eq!(*game.state(), GameState::default());
    }

    #[test]
    fn test_slash_click() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        start_playing(&mut game, "Kenji");
        game.drain_sounds();

        let slash = game.layout().slash.rect;
        click(&mut game, slash);
        click(&mut game, slash);

        assert_eq!(game.state().money, 2);
        assert_eq!(game.notifications().len(), 2);
        assert_eq!(game.notifications()[0].text, "+1");
        assert_eq!(game.ninja().current_state(), AnimationState::Slash);
        assert_eq!(game.bamboo().current_state(), AnimationState::Slash);
        assert_eq!(
            game.drain_sounds(),
            vec![SoundCue::Slash, SoundCue::Coin, SoundCue::Slash, SoundCue::Coin]
        );
        assert!(game.drain_sounds().is_empty());
    }

    #[test]
    fn test_upgrade_purchase_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        start_playing(&mut game, "Kenji");

        let katana = game.layout().upgrades[0].rect;
        click(&mut game, katana);
        assert_eq!(game.state().per_click, 1);
        assert_eq!(game.notifications().last().unwrap().text, "Not enough gold!");

        let slash = game.layout().slash.rect;
        for _ in 0..25 {
            click(&mut game, slash);
        }
        game.drain_sounds();
        click(&mut game, katana);

        assert_eq!(game.state().money, 5);
        assert_eq!(game.state().per_click, 2);
        assert_eq!(game.notifications().last().unwrap().text, "Katana +");
        assert_eq!(game.drain_sounds(), vec![SoundCue::Purchase]);
    }

    #[test]
    fn test_auto_income_per_whole_second() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        start_playing(&mut game, "Kenji");
        game.state.auto = 3;

        game.update(0.5);
        assert_eq!(game.state().money, 0);
        game.update(0.5);
        assert_eq!(game.state().money, 3);

        for _ in 0..8 {
            game.update(0.25);
        }
        assert_eq!(game.state().money, 9);
    }

    #[test]
    fn test_no_auto_income_off_the_game_screen() {
        let dir = tempfile::tempdir().unwrap();
        write_save(&dir, &SaveFile { auto: 10, name: "Ren".to_string(), ..Default::default() });
        let mut game = new_game(&dir);

        game.update(3.0);
        assert_eq!(game.state().money, 0);
    }

    #[test]
    fn test_notifications_expire() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        start_playing(&mut game, "Kenji");

        let slash = game.layout().slash.rect;
        click(&mut game, slash);
        game.update(1.0);
        assert_eq!(game.notifications().len(), 1);
        game.update(1.0);
        assert!(game.notifications().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        start_playing(&mut game, "Kenji");

        let slash = game.layout().slash.rect;
        for _ in 0..30 {
            click(&mut game, slash);
        }
        game.buy_upgrade(0);
        game.save().unwrap();

        let reset = game.layout().reset.rect;
        click(&mut game, reset);

        assert_eq!(game.screen(), Screen::title());
        assert_eq!(*game.state(), GameState::default());
        assert!(game.upgrades().is_pristine());
        assert!(!game.save_exists());
        assert!(game.notifications().is_empty());
        assert!(!dir.path().join(crate::save::manager::SAVE_FILE_NAME).exists());
    }

    #[test]
    fn test_autosave_while_playing() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        start_playing(&mut game, "Kenji");

        let slash = game.layout().slash.rect;
        click(&mut game, slash);
        for _ in 0..6 {
            game.update(1.0);
        }

        let manager = SaveManager::new(dir.path(), Duration::from_secs(5)).unwrap();
        assert_eq!(manager.load_game().unwrap().unwrap().money, 1);
    }

    #[test]
    fn test_frame_time_saturates() {
        assert_eq!(frame_time(0.5), Duration::from_millis(500));
        assert_eq!(frame_time(-1.0), Duration::ZERO);
        assert_eq!(frame_time(f32::INFINITY), Duration::MAX);
    }

    #[test]
    fn test_huge_frame_delta_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        start_playing(&mut game, "Kenji");
        game.update(1e30);
        game.update(1e30);
        assert!(game.save_exists());
    }

    #[test]
    fn test_quit_saves_progress() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        start_playing(&mut game, "Kenji");
        let slash = game.layout().slash.rect;
        click(&mut game, slash);

        game.handle_action(GameAction::Quit);
        assert!(game.should_quit());

        let manager = SaveManager::new(dir.path(), Duration::from_secs(5)).unwrap();
        assert_eq!(manager.load_game().unwrap().unwrap().money, 1);
    }

    #[test]
    fn test_quit_after_reset_leaves_no_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        start_playing(&mut game, "Kenji");
        game.reset();

        let quit = game.layout().quit.rect;
        click(&mut game, quit);
        assert!(game.should_quit());
        assert!(!dir.path().join(crate::save::manager::SAVE_FILE_NAME).exists());
    }

    #[test]
    fn test_typing_ignored_outside_name_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = new_game(&dir);
        game.handle_action(GameAction::TypeText("abc".to_string()));
        game.handle_action(GameAction::SubmitName);
        assert_eq!(game.name_buffer(), "");
        assert_eq!(game.screen(), Screen::title());
    }
}
