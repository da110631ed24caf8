use crate::animation::{AnimationState, AnimationTimeline};
use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// PNG files in `dir`, sorted by file name
///
/// Frame order comes from the names (`0001.png`, `0002.png`, ...).
pub fn frame_paths(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("png"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();
    Ok(paths)
}

/// One animation's frames, each its own texture
pub struct SpriteFrames<'a> {
    frames: Vec<Texture<'a>>,
}

impl<'a> SpriteFrames<'a> {
    pub fn load_dir(
        texture_creator: &'a TextureCreator<WindowContext>,
        dir: &Path,
    ) -> Result<Self, String> {
        let paths = frame_paths(dir).map_err(|e| format!("{}: {}", dir.display(), e))?;
        let frames = paths
            .iter()
            .map(|path| texture_creator.load_texture(path))
            .collect::<Result<Vec<_>, String>>()?;
        Ok(SpriteFrames { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<&Texture<'a>> {
        self.frames.get(index)
    }
}

/// Every animation of one sprite, keyed by state
pub struct SpriteAnimations<'a> {
    animations: HashMap<AnimationState, SpriteFrames<'a>>,
}

impl<'a> SpriteAnimations<'a> {
    /// Load `<root>/idle/*.png`, `<root>/slash/*.png`, ...
    ///
    /// Missing folders are logged and leave that animation empty; the
    /// sprite then draws a placeholder.
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>, root: &Path) -> Self {
        let mut animations = HashMap::new();
        for state in AnimationState::ALL {
            let dir = root.join(state.folder_name());
            match SpriteFrames::load_dir(texture_creator, &dir) {
                Ok(frames) if frames.is_empty() => {
                    warn!(dir = %dir.display(), "animation folder has no PNG frames");
                }
                Ok(frames) => {
                    animations.insert(state, frames);
                }
                Err(e) => warn!(dir = %dir.display(), "could not load animation: {}", e),
            }
        }
        SpriteAnimations { animations }
    }

    pub fn frame_counts(&self) -> HashMap<AnimationState, usize> {
        self.animations
            .iter()
            .map(|(&state, frames)| (state, frames.len()))
            .collect()
    }

    /// Draw the timeline's current frame centered on (`center_x`, `center_y`)
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        timeline: &AnimationTimeline,
        center_x: i32,
        center_y: i32,
    ) -> Result<(), String> {
        let texture = self
            .animations
            .get(&timeline.current_state())
            .and_then(|frames| frames.frame(timeline.current_frame()));

        match texture {
            Some(texture) => {
                let query = texture.query();
                let mut dest = Rect::new(0, 0, query.width, query.height);
                dest.center_on((center_x, center_y));
                canvas.copy(texture, None, Some(dest))
            }
            None => {
                // Placeholder so the scene still reads without art
                let mut dest = Rect::new(0, 0, 64, 96);
                dest.center_on((center_x, center_y));
                let color = match timeline.current_state() {
                    AnimationState::Idle => sdl2::pixels::Color::RGB(40, 40, 60),
                    AnimationState::Slash => sdl2::pixels::Color::RGB(200, 60, 60),
                };
                canvas.set_draw_color(color);
                canvas.fill_rect(dest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_paths_sorted_png_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["frame_02.png", "frame_10.png", "frame_01.PNG", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let names: Vec<String> = frame_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["frame_01.PNG", "frame_02.png", "frame_10.png"]);
    }

    #[test]
    fn test_empty_frames() {
        let frames = SpriteFrames { frames: Vec::new() };
        assert!(frames.is_empty());
        assert_eq!(frames.len(), 0);
        assert!(frames.frame(0).is_none());
    }

    #[test]
    fn test_frame_paths_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(frame_paths(&dir.path().join("nope")).is_err());
    }
}
