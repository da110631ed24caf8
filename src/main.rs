mod animation;
mod assets;
mod audio;
mod config;
mod game;
mod gui;
mod input_system;
mod render;
mod save;
mod sprite;
mod text;
mod ui;

use assets::GameTextures;
use audio::SoundBank;
use config::{DEFAULT_CONFIG_PATH, GameConfig};
use game::TycoonGame;
use input_system::InputSystem;
use render::SceneRenderer;
use save::SaveManager;
use std::time::Instant;
use tracing::{error, info, warn};

fn main() -> Result<(), String> {
    // Config is read before logging exists, so its failure is reported after
    let config_result = GameConfig::load_optional(DEFAULT_CONFIG_PATH);
    let config = match &config_result {
        Ok(Some(config)) => config.clone(),
        _ => GameConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .init();

    match config_result {
        Ok(Some(_)) => info!("loaded config from {}", DEFAULT_CONFIG_PATH),
        Ok(None) => info!("no config at {}, using defaults", DEFAULT_CONFIG_PATH),
        Err(e) => warn!("ignoring {}: {}", DEFAULT_CONFIG_PATH, e),
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(&config.title, config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let textures = GameTextures::load(&texture_creator, &config.asset_root);

    let sounds = match SoundBank::open(
        &sdl_context,
        &config.asset_path("sounds"),
        config.sound_volume,
    ) {
        Ok(sounds) => sounds,
        Err(e) => {
            warn!("audio unavailable: {}", e);
            SoundBank::silent()
        }
    };

    let save_dir = config.resolve_save_directory();
    let save_manager = SaveManager::new(&save_dir, config.autosave_interval())
        .map_err(|e| format!("Failed to create save manager: {}", e))?;
    info!(path = %save_manager.path().display(), "save location");

    let mut game = TycoonGame::new(save_manager, &textures.frame_counts());
    let mut input_system = InputSystem::new();
    let renderer = SceneRenderer::new();

    // Name entry relies on SDL text input events
    video_subsystem.text_input().start();

    info!("Controls:");
    info!("  Left Click - menu buttons, slash, upgrades, reset");
    info!("  Typing / Backspace / Enter - name entry");
    info!("  ESC - dismiss the new game confirmation");

    let frame_duration = config.frame_duration();
    let mut last_frame = Instant::now();

    'running: loop {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        input_system.set_context(game.screen().input_context());
        for action in input_system.poll_events(&mut event_pump) {
            game.handle_action(action);
            if game.should_quit() {
                break 'running;
            }
        }

        game.update(delta_time);

        for cue in game.drain_sounds() {
            sounds.play(cue);
        }

        if let Err(e) = renderer.render(&mut canvas, &game, &textures) {
            error!("render failed: {}", e);
        }
        canvas.present();

        // Cap framerate
        let elapsed = now.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    info!("goodbye");
    Ok(())
}
