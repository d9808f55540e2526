//! Per-player input driver.
//!
//! The driver turns whatever is controlling a player (a device, the AI, both,
//! or nothing) into one [`InputState`] per update. States and behavior-tree
//! nodes only ever read that state.

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::PlayerNumber;
use crate::config::InputConfig;
use crate::math::smooth_damp;

/// Who controls a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputSource {
    #[default]
    Human,
    Ai,
    /// Human input with optional AI override.
    Hybrid,
    /// Spectator: all input is zero.
    None,
}

impl InputSource {
    pub const fn accepts_ai(self) -> bool {
        matches!(self, Self::Ai | Self::Hybrid)
    }

    pub const fn accepts_human(self) -> bool {
        matches!(self, Self::Human | Self::Hybrid)
    }
}

/// Raw device signals for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceInput {
    pub left: bool,
    pub right: bool,
    /// Jump went down this frame.
    pub jump_down: bool,
    pub jump_held: bool,
}

/// Resolved input for one update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    /// Movement axis in `[-1, 1]`.
    pub move_axis: f32,
    /// Jump edge, true for exactly one update per press.
    pub jump_pressed: bool,
    pub jump_held: bool,
}

#[derive(Clone, Copy, Debug, Default)]
struct AiInput {
    axis: f32,
    jump_pressed: bool,
    jump_held: bool,
    smoothed_axis: f32,
    axis_velocity: f32,
}

/// Resolves device and AI signals into an [`InputState`].
#[derive(Clone, Debug)]
pub struct InputDriver {
    player: PlayerNumber,
    source: InputSource,
    config: InputConfig,
    device: DeviceInput,
    ai: AiInput,
    state: InputState,
}

impl InputDriver {
    pub fn new(player: PlayerNumber, source: InputSource, config: InputConfig) -> Self {
        Self {
            player,
            source,
            config,
            device: DeviceInput::default(),
            ai: AiInput::default(),
            state: InputState::default(),
        }
    }

    pub fn source(&self) -> InputSource {
        self.source
    }

    /// Switches the controlling source. Leaving AI control drops any injected
    /// AI input.
    pub fn set_source(&mut self, source: InputSource) {
        if source != self.source {
            tracing::debug!(
                player = %self.player,
                from = %self.source,
                to = %source,
                "input source changed"
            );
        }
        self.source = source;
        if !source.accepts_ai() {
            self.ai = AiInput::default();
        }
    }

    pub fn set_allow_ai_override(&mut self, allow: bool) {
        self.config.allow_ai_override = allow;
    }

    /// Latches device signals for the next update.
    pub fn set_device(&mut self, device: DeviceInput) {
        self.device = device;
    }

    /// Injects an AI movement axis, clamped to `[-1, 1]`.
    pub fn set_ai_move(&mut self, axis: f32) {
        self.ai.axis = axis.clamp(-1.0, 1.0);
    }

    pub fn set_ai_jump(&mut self, pressed: bool, held: bool) {
        self.ai.jump_pressed = pressed;
        self.ai.jump_held = held;
    }

    /// Injects a single AI jump press.
    pub fn trigger_ai_jump(&mut self) {
        self.set_ai_jump(true, false);
    }

    /// Resolves the input state for this update.
    pub fn update(&mut self, dt: f32) -> InputState {
        self.state = match self.source {
            InputSource::Human => self.human_state(),
            InputSource::Ai => self.ai_state(dt),
            InputSource::Hybrid => self.hybrid_state(),
            InputSource::None => InputState::default(),
        };

        self.device.jump_down = false;
        if self.source.accepts_ai() {
            self.ai.jump_pressed = false;
        }

        self.state
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn move_axis(&self) -> f32 {
        self.state.move_axis
    }

    pub fn jump_pressed(&self) -> bool {
        self.state.jump_pressed
    }

    pub fn jump_held(&self) -> bool {
        self.state.jump_held
    }

    pub fn is_moving(&self) -> bool {
        self.state.move_axis.abs() > self.config.moving_threshold
    }

    fn human_state(&self) -> InputState {
        let mut axis = 0.0;
        if self.device.left {
            axis = -1.0;
        }
        if self.device.right {
            axis = 1.0;
        }

        InputState {
            move_axis: self.player.mirror_axis(axis),
            jump_pressed: self.device.jump_down,
            jump_held: self.device.jump_held,
        }
    }

    fn ai_state(&mut self, dt: f32) -> InputState {
        let ai = &mut self.ai;
        ai.smoothed_axis = smooth_damp(
            ai.smoothed_axis,
            ai.axis,
            &mut ai.axis_velocity,
            self.config.ai_smooth_time,
            dt,
        );

        InputState {
            move_axis: ai.smoothed_axis,
            jump_pressed: ai.jump_pressed,
            jump_held: ai.jump_held,
        }
    }

    fn hybrid_state(&self) -> InputState {
        let mut state = self.human_state();
        if self.config.allow_ai_override {
            if self.ai.axis.abs() > self.config.moving_threshold {
                state.move_axis = self.ai.axis;
            }
            state.jump_pressed |= self.ai.jump_pressed;
            state.jump_held |= self.ai.jump_held;
        }
        state
    }
}
