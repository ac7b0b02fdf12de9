//! Sound cues
//!
//! Maps simulation events to sound effects and forwards them, with the
//! current volume, to whatever audio backend the host provides.

use crate::settings::AudioSettings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Jump impulse
    Jump,
    /// Obstacle cleared
    Score,
    /// Obstacles sped up
    SpeedUp,
    /// Run ended
    Crash,
}

impl SoundEffect {
    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::SpeedUp { .. } => Some(SoundEffect::SpeedUp),
            GameEvent::Crashed { .. } => Some(SoundEffect::Crash),
            GameEvent::Started | GameEvent::Reset => None,
        }
    }
}

/// Audio backend
pub trait AudioSink {
    /// Play `effect` at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Headless backend: logs cues
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::trace!("sound {:?} at {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &AudioSettings) -> Self {
        Self {
            sink,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play the cues for a tick's (or frame's) events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        played: Vec<(SoundEffect, f32)>,
    }

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.played.push((effect, volume));
        }
    }

    #[test]
    fn test_events_to_cues() {
        let mut audio = AudioManager::new(Recorder::default(), &AudioSettings::default());
        audio.handle_events(&[
            GameEvent::Started,
            GameEvent::Jumped,
            GameEvent::Scored { score: 1 },
            GameEvent::Crashed { obstacle_id: 2 },
        ]);
        let effects: Vec<SoundEffect> = audio.sink().played.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            effects,
            vec![SoundEffect::Jump, SoundEffect::Score, SoundEffect::Crash]
        );
        assert!((audio.sink().played[0].1 - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(Recorder::default(), &AudioSettings::default());
        audio.set_muted(true);
        audio.handle_events(&[GameEvent::Jumped]);
        assert!(audio.sink().played.is_empty());

        audio.set_muted(false);
        audio.set_master_volume(0.0);
        audio.play(SoundEffect::Jump);
        assert!(audio.sink().played.is_empty());
    }

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::new(Recorder::default(), &AudioSettings::default());
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(0.5);
        audio.play(SoundEffect::SpeedUp);
        assert_eq!(audio.sink().played, vec![(SoundEffect::SpeedUp, 0.5)]);
    }
}
