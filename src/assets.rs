//! Texture loading
//!
//! Everything under the asset root is optional: a missing image is logged
//! once here and the renderers draw a procedural stand-in instead.

use crate::game::SpriteFrameCounts;
use crate::gui::ButtonSkin;
use crate::sprite::SpriteAnimations;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// A button image and its optional hover variant
pub struct ButtonTextures<'a> {
    pub normal: Texture<'a>,
    pub hover: Option<Texture<'a>>,
}

/// Helper struct to hold all game textures
/// This avoids repeating texture parameters everywhere
pub struct GameTextures<'a> {
    pub background: Option<Texture<'a>>,
    pub title_screen: Option<Texture<'a>>,
    pub coin: Option<Texture<'a>>,
    pub buttons: HashMap<ButtonSkin, ButtonTextures<'a>>,
    pub ninja: SpriteAnimations<'a>,
    pub bamboo: SpriteAnimations<'a>,
}

fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Option<Texture<'a>> {
    match texture_creator.load_texture(path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!(path = %path.display(), "could not load texture: {}", e);
            None
        }
    }
}

impl<'a> GameTextures<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>, asset_root: &Path) -> Self {
        let mut buttons = HashMap::new();
        for skin in ButtonSkin::ALL {
            let Some(normal) = load_texture(texture_creator, &asset_root.join(skin.file_name())) else {
                continue;
            };
            // Hover art is optional and its absence is not worth a warning
            let hover_path = asset_root.join(skin.hover_file_name());
            let hover = if hover_path.exists() {
                load_texture(texture_creator, &hover_path)
            } else {
                None
            };
            buttons.insert(skin, ButtonTextures { normal, hover });
        }

        let textures = GameTextures {
            background: load_texture(texture_creator, &asset_root.join("bamboo-bg.png")),
            title_screen: load_texture(texture_creator, &asset_root.join("title_screen.png")),
            coin: load_texture(texture_creator, &asset_root.join("coin.png")),
            buttons,
            ninja: SpriteAnimations::load(texture_creator, &asset_root.join("ninja")),
            bamboo: SpriteAnimations::load(
                texture_creator,
                &asset_root.join("breakables").join("bamboo"),
            ),
        };

        info!(
            buttons = textures.buttons.len(),
            "textures loaded from {}",
            asset_root.display()
        );
        textures
    }

    pub fn button(&self, skin: ButtonSkin) -> Option<&ButtonTextures<'a>> {
        self.buttons.get(&skin)
    }

    pub fn frame_counts(&self) -> SpriteFrameCounts {
        SpriteFrameCounts {
            ninja: self.ninja.frame_counts(),
            bamboo: self.bamboo.frame_counts(),
        }
    }
}
