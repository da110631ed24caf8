/// Per-screen rendering
///
/// The session owns no SDL resources, so each frame the renderer reads it
/// and draws whichever screen is current.
///
/// # Usage Example
///
/// ```rust
/// let renderer = SceneRenderer::new();
/// renderer.render(&mut canvas, &game, &textures)?;
/// canvas.present();
/// ```
use crate::assets::GameTextures;
use crate::game::{Screen, TycoonGame};
use crate::gui::{ConfirmDialog, game_screen, name_entry_screen, title_screen};
use crate::ui::FloatingText;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Stateless renderers shared by every frame
pub struct SceneRenderer {
    confirm_dialog: ConfirmDialog,
    floating_text: FloatingText,
}

impl SceneRenderer {
    pub fn new() -> Self {
        SceneRenderer {
            confirm_dialog: ConfirmDialog::new_game(),
            floating_text: FloatingText::new(),
        }
    }

    /// Draw the current screen. Does not present the canvas.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        game: &TycoonGame,
        textures: &GameTextures,
    ) -> Result<(), String> {
        match game.screen() {
            Screen::Opening { .. } => {
                title_screen::render(canvas, game, textures, &self.confirm_dialog)
            }
            Screen::NameInput => name_entry_screen::render(canvas, game),
            Screen::MainGame => game_screen::render(canvas, game, textures, &self.floating_text),
        }
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}
