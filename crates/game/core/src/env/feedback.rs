//! Fire-and-forget audio and visual feedback.

use std::sync::{Arc, Mutex};

use glam::Vec2;
use strum::{AsRefStr, Display};

/// One-shot sound cues raised by player states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SoundCue {
    Kick,
    Jump,
    Land,
}

/// Visual effects raised by player states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VisualEffect {
    Kick { point: Vec2, direction: Vec2 },
    BallTrail,
}

/// Audio output. Implementations must not block.
pub trait AudioSink: Send {
    fn play(&mut self, cue: SoundCue);

    /// Starts or stops the looping footstep sound.
    fn set_footsteps(&mut self, playing: bool);
}

/// Visual effects output. Implementations must not block.
pub trait EffectsSink: Send {
    fn play(&mut self, effect: VisualEffect);
}

/// Discards every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}

    fn set_footsteps(&mut self, _playing: bool) {}
}

/// Discards every effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEffects;

impl EffectsSink for NullEffects {
    fn play(&mut self, _effect: VisualEffect) {}
}

/// Anything a [`FeedbackLog`] can record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Feedback {
    Sound(SoundCue),
    Footsteps(bool),
    Effect(VisualEffect),
}

/// Shared in-memory recorder usable as both sinks.
///
/// Clones share the same log, so one handle can be given to an actor while
/// another is kept for inspection.
#[derive(Clone, Debug, Default)]
pub struct FeedbackLog {
    events: Arc<Mutex<Vec<Feedback>>>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<Feedback> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Number of times `cue` was played.
    pub fn count(&self, cue: SoundCue) -> usize {
        let cue = Feedback::Sound(cue);
        self.events().iter().filter(|event| **event == cue).count()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    fn record(&self, event: Feedback) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(_) => tracing::warn!(?event, "feedback log poisoned, dropping event"),
        }
    }
}

impl AudioSink for FeedbackLog {
    fn play(&mut self, cue: SoundCue) {
        self.record(Feedback::Sound(cue));
    }

    fn set_footsteps(&mut self, playing: bool) {
        self.record(Feedback::Footsteps(playing));
    }
}

impl EffectsSink for FeedbackLog {
    fn play(&mut self, effect: VisualEffect) {
        self.record(Feedback::Effect(effect));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_log() {
        let log = FeedbackLog::new();
        let mut audio = log.clone();
        let mut effects = log.clone();

        AudioSink::play(&mut audio, SoundCue::Jump);
        audio.set_footsteps(true);
        EffectsSink::play(&mut effects, VisualEffect::BallTrail);

        assert_eq!(
            log.events(),
            vec![
                Feedback::Sound(SoundCue::Jump),
                Feedback::Footsteps(true),
                Feedback::Effect(VisualEffect::BallTrail),
            ]
        );
        assert_eq!(log.count(SoundCue::Jump), 1);

        log.clear();
        assert!(log.events().is_empty());
    }
}
