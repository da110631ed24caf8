//! Main Game Screen
//!
//! Background, the ninja and bamboo sprites, floating notifications, the
//! HUD (name, money, income) and the slash, upgrade and reset buttons.

use crate::assets::GameTextures;
use crate::game::{BLACK, TycoonGame, WHITE, YELLOW};
use crate::text::draw_simple_text;
use crate::ui::FloatingText;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const NINJA_POS: (i32, i32) = (400, 600);
const BAMBOO_POS: (i32, i32) = (600, 600);
const COIN_POS: (i32, i32) = (30, 710);

pub fn render(
    canvas: &mut Canvas<Window>,
    game: &TycoonGame,
    textures: &GameTextures,
    floating_text: &FloatingText,
) -> Result<(), String> {
    match &textures.background {
        Some(texture) => canvas.copy(texture, None, None)?,
        None => {
            canvas.set_draw_color(sdl2::pixels::Color::RGB(120, 160, 90));
            canvas.clear();
        }
    }

    textures.ninja.render(canvas, game.ninja(), NINJA_POS.0, NINJA_POS.1)?;
    textures.bamboo.render(canvas, game.bamboo(), BAMBOO_POS.0, BAMBOO_POS.1)?;

    match &textures.coin {
        Some(texture) => {
            let query = texture.query();
            canvas.copy(
                texture,
                None,
                Some(Rect::new(COIN_POS.0, COIN_POS.1, query.width, query.height)),
            )?;
        }
        None => {
            canvas.set_draw_color(YELLOW);
            canvas.fill_rect(Rect::new(COIN_POS.0, COIN_POS.1 + 14, 32, 32))?;
        }
    }

    for notification in game.notifications() {
        floating_text.render(canvas, notification)?;
    }

    let state = game.state();
    draw_simple_text(canvas, &state.name, 400, 80, BLACK, 3)?;
    draw_simple_text(canvas, &state.money.to_string(), 75, 730, BLACK, 3)?;
    draw_simple_text(canvas, &format!("Per Click: +{}", state.per_click), 30, 70, WHITE, 3)?;
    draw_simple_text(canvas, &format!("Auto Income: {}/sec", state.auto), 30, 110, WHITE, 3)?;

    let layout = game.layout();
    let (mx, my) = game.mouse_position();

    layout.slash.render(
        canvas,
        textures.button(layout.slash.skin),
        layout.slash.is_clicked(mx, my),
    )?;

    for (upgrade, button) in game.upgrades().iter().zip(&layout.upgrades) {
        let label = format!("{} (${})", upgrade.name, upgrade.cost());
        button.render_with_label(
            canvas,
            textures.button(button.skin),
            button.is_clicked(mx, my),
            &label,
            button.skin,
            button.text_color,
        )?;
    }

    layout.reset.render(
        canvas,
        textures.button(layout.reset.skin),
        layout.reset.is_clicked(mx, my),
    )?;

    Ok(())
}
