//! Floating text component for temporary notifications
//!
//! Renders "+N" click rewards and purchase/failure messages that rise and
//! fade out. The animation state lives in [`FloatingTextInstance`]; this
//! renderer only draws it.
//!
//! # Example
//!
//! ```rust
//! use crate::ui::FloatingText;
//!
//! // Create once (stateless renderer)
//! let floating_text = FloatingText::new();
//!
//! // Render each live notification
//! for notification in game.notifications() {
//!     floating_text.render(&mut canvas, notification)?;
//! }
//! ```

use crate::game::FloatingTextInstance;
use crate::text::{draw_text_with_alpha, text_width};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for floating text appearance
#[derive(Debug, Clone)]
pub struct FloatingTextStyle {
    /// Bitmap font scale
    pub scale: u32,

    /// Outline/shadow offset for better visibility
    pub outline_offset: i32,

    /// Outline color (usually black for contrast)
    pub outline_color: Color,
}

impl Default for FloatingTextStyle {
    fn default() -> Self {
        FloatingTextStyle {
            scale: 3,
            outline_offset: 2,
            outline_color: Color::RGB(0, 0, 0),
        }
    }
}

/// Stateless renderer for [`FloatingTextInstance`]s
///
/// Text is drawn centered on the instance's x, with a shadow copy offset
/// behind it, at the instance's current alpha.
pub struct FloatingText {
    style: FloatingTextStyle,
}

impl FloatingText {
    pub fn new() -> Self {
        FloatingText {
            style: FloatingTextStyle::default(),
        }
    }

    pub fn with_style(style: FloatingTextStyle) -> Self {
        FloatingText { style }
    }

    /// Left edge that centers `text` on `center_x`
    fn start_x(&self, text: &str, center_x: i32) -> i32 {
        center_x - (text_width(text, self.style.scale) / 2) as i32
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        instance: &FloatingTextInstance,
    ) -> Result<(), String> {
        let alpha = instance.alpha();
        if alpha == 0 {
            return Ok(());
        }

        let x = self.start_x(&instance.text, instance.x as i32);
        let y = instance.y as i32;
        let offset = self.style.outline_offset;

        // Shadow first
        draw_text_with_alpha(
            canvas,
            &instance.text,
            x + offset,
            y + offset,
            self.style.outline_color,
            alpha,
            self.style.scale,
        )?;
        draw_text_with_alpha(
            canvas,
            &instance.text,
            x,
            y,
            instance.color,
            alpha,
            self.style.scale,
        )
    }
}

impl Default for FloatingText {
    fn default() -> Self {
        Self::new()
    }
}
