//! New Game Confirmation Dialog
//!
//! Panel drawn over the title screen asking whether to throw away the
//! current progress. Its YES/NO buttons live in the game layout so the
//! session can hit-test them.

use super::Button;
use crate::assets::GameTextures;
use crate::game::DARK_GREEN;
use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Configuration for dialog appearance
#[derive(Debug, Clone)]
pub struct DialogStyle {
    /// Panel background color
    pub background_color: Color,

    /// Border color
    pub border_color: Color,

    /// How much the screen behind is darkened (0-255)
    pub overlay_alpha: u8,

    pub text_color: Color,

    pub text_scale: u32,
}

impl Default for DialogStyle {
    fn default() -> Self {
        DialogStyle {
            background_color: DARK_GREEN,
            border_color: Color::RGB(20, 26, 6),
            overlay_alpha: 140,
            text_color: Color::RGB(255, 255, 255),
            text_scale: 2,
        }
    }
}

pub struct ConfirmDialog {
    title: String,
    message: String,
    style: DialogStyle,
}

impl ConfirmDialog {
    pub fn new_game() -> Self {
        ConfirmDialog {
            title: "Start a new game?".to_string(),
            message: "All progress will be lost!".to_string(),
            style: DialogStyle::default(),
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        panel: Rect,
        buttons: [&Button; 2],
        textures: &GameTextures,
        mouse: (i32, i32),
    ) -> Result<(), String> {
        // Darken the title screen
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(panel)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(panel)?;

        let center_x = panel.center().x();
        draw_text_centered(
            canvas,
            &self.title,
            center_x,
            panel.y() + 35,
            self.style.text_color,
            self.style.text_scale,
        )?;
        draw_text_centered(
            canvas,
            &self.message,
            center_x,
            panel.y() + 85,
            self.style.text_color,
            self.style.text_scale,
        )?;

        for button in buttons {
            button.render(
                canvas,
                textures.button(button.skin),
                button.is_clicked(mouse.0, mouse.1),
            )?;
        }

        Ok(())
    }
}

impl Default for ConfirmDialog {
    fn default() -> Self {
        Self::new_game()
    }
}
