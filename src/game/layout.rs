// Fixed positions of every clickable element, in window pixels.

use super::types::{DARK_GREEN, WHITE};
use crate::gui::{Button, ButtonSkin};
use sdl2::rect::Rect;

const MENU_X: i32 = 350;
const MENU_WIDTH: u32 = 300;
const MENU_HEIGHT: u32 = 80;

const UPGRADE_X: i32 = 15;
const UPGRADE_TOP: i32 = 280;
const UPGRADE_SPACING: i32 = 70;
const UPGRADE_WIDTH: u32 = 300;
const UPGRADE_HEIGHT: u32 = 60;

pub struct Layout {
    pub new_game: Button,
    pub load_game: Button,
    pub quit: Button,
    pub confirm_panel: Rect,
    pub confirm_yes: Button,
    pub confirm_no: Button,
    pub slash: Button,
    pub reset: Button,
    /// One per catalog entry, same order
    pub upgrades: Vec<Button>,
}

impl Layout {
    pub fn standard(upgrade_count: usize) -> Self {
        let upgrades: Vec<Button> = (0..upgrade_count)
            .map(|i| {
                Button::new(
                    UPGRADE_X,
                    UPGRADE_TOP + i as i32 * UPGRADE_SPACING,
                    UPGRADE_WIDTH,
                    UPGRADE_HEIGHT,
                    ButtonSkin::Upgrade,
                    "",
                    DARK_GREEN,
                )
                .with_text_scale(2)
            })
            .collect();

        // Reset sits one gap below the last upgrade
        let reset_y = UPGRADE_TOP + upgrade_count as i32 * UPGRADE_SPACING + 10;

        Layout {
            new_game: Button::new(MENU_X, 300, MENU_WIDTH, MENU_HEIGHT, ButtonSkin::Green, "NEW GAME", WHITE),
            load_game: Button::new(MENU_X, 400, MENU_WIDTH, MENU_HEIGHT, ButtonSkin::Green, "LOAD GAME", WHITE),
            quit: Button::new(MENU_X, 500, MENU_WIDTH, MENU_HEIGHT, ButtonSkin::Red, "QUIT", WHITE),
            confirm_panel: Rect::new(250, 350, 500, 300),
            confirm_yes: Button::new(MENU_X, 500, MENU_WIDTH, 60, ButtonSkin::Green, "YES", WHITE),
            confirm_no: Button::new(MENU_X, 580, MENU_WIDTH, 60, ButtonSkin::Red, "NO", WHITE),
            slash: Button::new(840, 650, 140, 140, ButtonSkin::Slash, "", WHITE),
            reset: Button::new(UPGRADE_X, reset_y, UPGRADE_WIDTH, UPGRADE_HEIGHT, ButtonSkin::Red, "RESET", DARK_GREEN),
            upgrades,
        }
    }

    /// Index of the upgrade button under the cursor
    pub fn upgrade_at(&self, x: i32, y: i32) -> Option<usize> {
        self.upgrades.iter().position(|b| b.is_clicked(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_buttons_stack() {
        let layout = Layout::standard(3);
        assert_eq!(layout.upgrades.len(), 3);
        assert_eq!(layout.upgrades[0].rect.y(), 280);
        assert_eq!(layout.upgrades[2].rect.y(), 420);
        assert_eq!(layout.reset.rect.y(), 500);
    }

    #[test]
    fn test_upgrade_at() {
        let layout = Layout::standard(3);
        assert_eq!(layout.upgrade_at(20, 290), Some(0));
        assert_eq!(layout.upgrade_at(20, 355), Some(1));
        assert_eq!(layout.upgrade_at(20, 345), None);
        assert_eq!(layout.upgrade_at(500, 290), None);
    }

    #[test]
    fn test_dialog_buttons_inside_panel() {
        let layout = Layout::standard(3);
        assert!(layout.confirm_panel.contains_rect(layout.confirm_yes.rect));
        assert!(layout.confirm_panel.contains_rect(layout.confirm_no.rect));
    }

    #[test]
    fn test_gameplay_buttons_do_not_overlap() {
        let layout = Layout::standard(3);
        let mut rects: Vec<Rect> = layout.upgrades.iter().map(|b| b.rect).collect();
        rects.push(layout.reset.rect);
        rects.push(layout.slash.rect);
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.has_intersection(*b), "{:?} overlaps {:?}", a, b);
            }
        }
    }
}
