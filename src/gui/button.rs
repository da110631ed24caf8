//! Clickable Button Component
//!
//! A screen-space rectangle with a label. Hit testing is pure geometry, so
//! game logic can use buttons without a canvas. Rendering uses the skin's
//! texture when one was loaded (with an optional hover variant) and falls
//! back to a filled rectangle otherwise.

use crate::assets::ButtonTextures;
use crate::text::{draw_simple_text, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Artwork a button is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSkin {
    Green,
    Red,
    Gray,
    Upgrade,
    Slash,
}

impl ButtonSkin {
    pub const ALL: [ButtonSkin; 5] = [
        ButtonSkin::Green,
        ButtonSkin::Red,
        ButtonSkin::Gray,
        ButtonSkin::Upgrade,
        ButtonSkin::Slash,
    ];

    /// Image file, relative to the asset root. The hover variant is the same
    /// name with `-hover` before the extension.
    pub fn file_name(&self) -> &'static str {
        match self {
            ButtonSkin::Green => "green-btn.png",
            ButtonSkin::Red => "red-btn.png",
            ButtonSkin::Gray => "gray-btn.png",
            ButtonSkin::Upgrade => "upgrade-btn.png",
            ButtonSkin::Slash => "slash-btn.png",
        }
    }

    pub fn hover_file_name(&self) -> String {
        let name = self.file_name();
        match name.rsplit_once('.') {
            Some((base, ext)) => format!("{}-hover.{}", base, ext),
            None => format!("{}-hover", name),
        }
    }

    /// Fill color when the image is missing
    pub fn fallback_color(&self) -> Color {
        match self {
            ButtonSkin::Green => Color::RGB(60, 150, 60),
            ButtonSkin::Red => Color::RGB(190, 50, 50),
            ButtonSkin::Gray => Color::RGB(150, 150, 150),
            ButtonSkin::Upgrade => Color::RGB(214, 184, 120),
            ButtonSkin::Slash => Color::RGB(200, 200, 210),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub skin: ButtonSkin,
    pub text_color: Color,
    pub text_scale: u32,
}

impl Button {
    pub fn new(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        skin: ButtonSkin,
        label: &str,
        text_color: Color,
    ) -> Self {
        Button {
            rect: Rect::new(x, y, width, height),
            label: label.to_string(),
            skin,
            text_color,
            text_scale: 3,
        }
    }

    pub fn with_text_scale(mut self, scale: u32) -> Self {
        self.text_scale = scale;
        self
    }

    pub fn is_clicked(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point((x, y))
    }

    /// Render with the button's own label
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: Option<&ButtonTextures>,
        hovered: bool,
    ) -> Result<(), String> {
        self.render_with_label(canvas, textures, hovered, &self.label, self.skin, self.text_color)
    }

    /// Render with a label, skin and text color chosen at draw time
    ///
    /// Used for buttons whose caption tracks game state (upgrade prices) or
    /// that grey out (load game without a save).
    pub fn render_with_label(
        &self,
        canvas: &mut Canvas<Window>,
        textures: Option<&ButtonTextures>,
        hovered: bool,
        label: &str,
        skin: ButtonSkin,
        text_color: Color,
    ) -> Result<(), String> {
        match textures {
            Some(textures) => {
                let texture = match (&textures.hover, hovered) {
                    (Some(hover), true) => hover,
                    _ => &textures.normal,
                };
                canvas.copy(texture, None, Some(self.rect))?;
            }
            None => {
                let base = skin.fallback_color();
                let fill = if hovered { lighten(base, 30) } else { base };
                canvas.set_draw_color(fill);
                canvas.fill_rect(self.rect)?;
                canvas.set_draw_color(Color::RGB(0, 0, 0));
                canvas.draw_rect(self.rect)?;
            }
        }

        if !label.is_empty() {
            let label_x = self.rect.center().x() - (text_width(label, self.text_scale) / 2) as i32;
            let label_y = self.rect.center().y() - (text_height(self.text_scale) / 2) as i32;
            draw_simple_text(canvas, label, label_x, label_y, text_color, self.text_scale)?;
        }

        Ok(())
    }
}

fn lighten(color: Color, amount: u8) -> Color {
    Color::RGB(
        color.r.saturating_add(amount),
        color.g.saturating_add(amount),
        color.b.saturating_add(amount),
    )
}
