//! Name Entry Screen

use crate::game::{BLACK, GREEN, TycoonGame, WHITE};
use crate::text::draw_simple_text;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub fn render(canvas: &mut Canvas<Window>, game: &TycoonGame) -> Result<(), String> {
    canvas.set_draw_color(WHITE);
    canvas.clear();

    draw_simple_text(canvas, "Enter your name:", 350, 200, BLACK, 3)?;
    draw_simple_text(canvas, &format!("{}|", game.name_buffer()), 350, 250, GREEN, 3)?;
    draw_simple_text(canvas, "(Press Enter to continue)", 350, 300, BLACK, 2)?;

    Ok(())
}
