//! Sprite animation state
//!
//! `AnimationTimeline` is the texture-free half of an animated sprite: it
//! knows which animation is playing and which frame is current. The textures
//! live in `sprite::SpriteAnimations`, which draws whatever frame the timeline
//! points at.
//!
//! Idle loops forever. Slash plays once and falls back to Idle.

use std::collections::HashMap;

/// Seconds per frame for the ninja
pub const NINJA_FRAME_SPEED: f32 = 0.1;

/// Seconds per frame for the bamboo stalk
pub const BAMBOO_FRAME_SPEED: f32 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Slash,
}

impl AnimationState {
    pub const ALL: [AnimationState; 2] = [AnimationState::Idle, AnimationState::Slash];

    /// Sub-directory holding this animation's frames
    pub fn folder_name(&self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Slash => "slash",
        }
    }

    /// State to switch to once a non-looping animation runs out of frames
    fn on_finish(&self) -> AnimationState {
        match self {
            AnimationState::Idle => AnimationState::Idle,
            AnimationState::Slash => AnimationState::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTimeline {
    current_state: AnimationState,
    frame_index: usize,
    frame_timer: f32,
    frame_speed: f32,
    frame_counts: HashMap<AnimationState, usize>,
}

impl AnimationTimeline {
    pub fn new(frame_speed: f32) -> Self {
        AnimationTimeline {
            current_state: AnimationState::default(),
            frame_index: 0,
            frame_timer: 0.0,
            frame_speed,
            frame_counts: HashMap::new(),
        }
    }

    /// Builder-style frame count registration
    pub fn with_frames(mut self, state: AnimationState, count: usize) -> Self {
        self.set_frame_count(state, count);
        self
    }

    pub fn set_frame_count(&mut self, state: AnimationState, count: usize) {
        self.frame_counts.insert(state, count);
        if state == self.current_state && self.frame_index >= self.frame_count(state) {
            self.frame_index = 0;
        }
    }

    /// Frames in an animation; an animation with no frames counts as one
    fn frame_count(&self, state: AnimationState) -> usize {
        self.frame_counts.get(&state).copied().unwrap_or(1).max(1)
    }

    /// Switch to `state`, restarting from the first frame.
    ///
    /// Playing the state that is already running does nothing unless
    /// `restart` is set.
    pub fn play(&mut self, state: AnimationState, restart: bool) {
        if self.current_state != state || restart {
            self.current_state = state;
            self.frame_index = 0;
            self.frame_timer = 0.0;
        }
    }

    pub fn update(&mut self, delta_time: f32) {
        self.frame_timer += delta_time;
        if self.frame_timer < self.frame_speed {
            return;
        }

        self.frame_timer = 0.0;
        self.frame_index += 1;

        if self.frame_index >= self.frame_count(self.current_state) {
            self.current_state = self.current_state.on_finish();
            self.frame_index = 0;
        }
    }

    pub fn current_state(&self) -> AnimationState {
        self.current_state
    }

    pub fn current_frame(&self) -> usize {
        self.frame_index
    }

    pub fn reset(&mut self) {
        self.play(AnimationState::Idle, true);
    }
}
