// Shared enums, colors and helper structs used throughout the game

use sdl2::pixels::Color;

pub const WHITE: Color = Color::RGB(255, 255, 255);
pub const BLACK: Color = Color::RGB(0, 0, 0);
pub const GREEN: Color = Color::RGB(50, 205, 50);
pub const GRAY: Color = Color::RGB(180, 180, 180);
pub const RED: Color = Color::RGB(255, 80, 80);
pub const YELLOW: Color = Color::RGB(255, 255, 0);
pub const BRIGHT_GREEN: Color = Color::RGB(0, 255, 0);
pub const DARK_GREEN: Color = Color::RGB(58, 71, 16);

/// Seconds a notification stays on screen
pub const NOTIFICATION_LIFETIME: f32 = 2.0;

/// Pixels per second a notification drifts upward
pub const NOTIFICATION_RISE_SPEED: f32 = 30.0;

/// Floating text instance for tracking animated notifications
///
/// Drifts upward and fades out linearly over its lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingTextInstance {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub color: Color,
    pub lifetime: f32,
    pub max_lifetime: f32,
}

impl FloatingTextInstance {
    pub fn new(text: impl Into<String>, x: f32, y: f32, color: Color) -> Self {
        FloatingTextInstance {
            x,
            y,
            text: text.into(),
            color,
            lifetime: 0.0,
            max_lifetime: NOTIFICATION_LIFETIME,
        }
    }

    pub fn update(&mut self, delta_time: f32) {
        self.lifetime += delta_time;
        self.y -= NOTIFICATION_RISE_SPEED * delta_time;
    }

    /// Opacity, 255 when fresh down to 0 at the end of its life
    pub fn alpha(&self) -> u8 {
        let remaining = (1.0 - self.lifetime / self.max_lifetime).clamp(0.0, 1.0);
        (remaining * 255.0) as u8
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime < self.max_lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_text_rises_and_fades() {
        let mut text = FloatingTextInstance::new("+1", 100.0, 200.0, YELLOW);
        assert_eq!(text.alpha(), 255);

        text.update(1.0);
        assert_eq!(text.y, 170.0);
        assert_eq!(text.alpha(), 127);
        assert!(text.is_alive());
    }

    #[test]
    fn test_floating_text_expires() {
        let mut text = FloatingTextInstance::new("+1", 0.0, 0.0, YELLOW);
        text.update(1.5);
        assert!(text.is_alive());
        text.update(0.5);
        assert!(!text.is_alive());
        assert_eq!(text.alpha(), 0);
    }
}
