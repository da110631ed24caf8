//! Sound effects
//!
//! Game logic only queues `SoundCue`s; the main loop hands them to a
//! `SoundBank`. With the `audio` feature the bank plays WAV files through
//! SDL2_mixer, otherwise it just logs the cue.

use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Slash,
    Coin,
    Purchase,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Slash, SoundCue::Coin, SoundCue::Purchase];

    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::Slash => "slash.wav",
            SoundCue::Coin => "coin.wav",
            SoundCue::Purchase => "purchase.wav",
        }
    }
}

#[cfg(feature = "audio")]
pub struct SoundBank {
    chunks: std::collections::HashMap<SoundCue, sdl2::mixer::Chunk>,
    _mixer: Option<sdl2::mixer::Sdl2MixerContext>,
    _audio: Option<sdl2::AudioSubsystem>,
}

#[cfg(feature = "audio")]
impl SoundBank {
    /// Open the mixer and load every cue from `sound_dir`
    ///
    /// A cue whose file is missing stays silent.
    pub fn open(sdl: &sdl2::Sdl, sound_dir: &Path, volume: f32) -> Result<Self, String> {
        use sdl2::mixer::{self, Chunk, InitFlag};

        let audio = sdl.audio()?;
        mixer::open_audio(
            mixer::DEFAULT_FREQUENCY,
            mixer::DEFAULT_FORMAT,
            mixer::DEFAULT_CHANNELS,
            1024,
        )?;
        let mixer_context = mixer::init(InitFlag::empty())?;
        mixer::allocate_channels(8);

        let chunk_volume = (volume.clamp(0.0, 1.0) * mixer::MAX_VOLUME as f32) as i32;
        let mut chunks = std::collections::HashMap::new();
        for cue in SoundCue::ALL {
            let path = sound_dir.join(cue.file_name());
            match Chunk::from_file(&path) {
                Ok(mut chunk) => {
                    chunk.set_volume(chunk_volume);
                    chunks.insert(cue, chunk);
                }
                Err(e) => warn!(path = %path.display(), "could not load sound: {}", e),
            }
        }

        Ok(SoundBank {
            chunks,
            _mixer: Some(mixer_context),
            _audio: Some(audio),
        })
    }

    pub fn silent() -> Self {
        SoundBank {
            chunks: std::collections::HashMap::new(),
            _mixer: None,
            _audio: None,
        }
    }

    pub fn play(&self, cue: SoundCue) {
        let Some(chunk) = self.chunks.get(&cue) else {
            debug!(?cue, "no sound loaded for cue");
            return;
        };
        if let Err(e) = sdl2::mixer::Channel::all().play(chunk, 0) {
            warn!(?cue, "failed to play sound: {}", e);
        }
    }
}

#[cfg(not(feature = "audio"))]
pub struct SoundBank;

#[cfg(not(feature = "audio"))]
impl SoundBank {
    /// Built without the `audio` feature: every cue is only logged
    pub fn open(_sdl: &sdl2::Sdl, sound_dir: &Path, _volume: f32) -> Result<Self, String> {
        warn!(
            dir = %sound_dir.display(),
            "built without the `audio` feature, sound effects are disabled"
        );
        Ok(SoundBank)
    }

    pub fn silent() -> Self {
        SoundBank
    }

    pub fn play(&self, cue: SoundCue) {
        debug!(?cue, "sound cue");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_files() {
        assert_eq!(SoundCue::Slash.file_name(), "slash.wav");
        assert_eq!(SoundCue::Coin.file_name(), "coin.wav");
        assert_eq!(SoundCue::Purchase.file_name(), "purchase.wav");
    }

    #[test]
    fn test_silent_bank_accepts_cues() {
        let bank = SoundBank::silent();
        for cue in SoundCue::ALL {
            bank.play(cue);
        }
    }
}
