//! Title Screen
//!
//! NEW GAME / LOAD GAME / QUIT over the title art. LOAD GAME is greyed out
//! while there is no save to load.

use super::{ButtonSkin, ConfirmDialog};
use crate::assets::GameTextures;
use crate::game::{BLACK, DARK_GREEN, GRAY, TycoonGame, WHITE};
use crate::text::draw_text_centered;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub fn render(
    canvas: &mut Canvas<Window>,
    game: &TycoonGame,
    textures: &GameTextures,
    dialog: &ConfirmDialog,
) -> Result<(), String> {
    let layout = game.layout();
    let center_x = layout.new_game.rect.center().x();

    match &textures.title_screen {
        Some(texture) => canvas.copy(texture, None, None)?,
        None => {
            canvas.set_draw_color(DARK_GREEN);
            canvas.clear();
            draw_text_centered(canvas, "CLICK TYCOON", center_x, 150, WHITE, 8)?;
        }
    }

    let (mx, my) = game.mouse_position();
    // Hover feedback is suppressed while the dialog covers the menu
    let hover = |hit: bool| hit && !game.screen().is_confirming_new_game();

    layout.new_game.render(
        canvas,
        textures.button(layout.new_game.skin),
        hover(layout.new_game.is_clicked(mx, my)),
    )?;

    if game.save_exists() {
        layout.load_game.render(
            canvas,
            textures.button(layout.load_game.skin),
            hover(layout.load_game.is_clicked(mx, my)),
        )?;
        if let Some(saved) = game.last_saved_label() {
            let label = format!("saved {}", saved);
            draw_text_centered(
                canvas,
                &label,
                layout.load_game.rect.center().x(),
                layout.load_game.rect.bottom() + 4,
                GRAY,
                1,
            )?;
        }
    } else {
        layout.load_game.render_with_label(
            canvas,
            textures.button(ButtonSkin::Gray),
            false,
            &layout.load_game.label,
            ButtonSkin::Gray,
            BLACK,
        )?;
    }

    layout.quit.render(
        canvas,
        textures.button(layout.quit.skin),
        hover(layout.quit.is_clicked(mx, my)),
    )?;

    if game.screen().is_confirming_new_game() {
        dialog.render(
            canvas,
            layout.confirm_panel,
            [&layout.confirm_yes, &layout.confirm_no],
            textures,
            (mx, my),
        )?;
    }

    Ok(())
}
