//! Audio cue seam
//!
//! The puzzle only ever starts or stops a looping cue (grinding stone, rising
//! relic). Playback itself belongs to the host.

/// Sound cues the scene can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Statue grinding up or down
    StoneGrind,
    /// Relic rising to the surface
    RelicRise,
}

/// Fire-and-forget audio source
pub trait AudioCue {
    fn play(&mut self, effect: SoundEffect);
    fn stop(&mut self, effect: SoundEffect);
}

/// Audio source that drops every request
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioCue for SilentAudio {
    fn play(&mut self, _effect: SoundEffect) {}
    fn stop(&mut self, _effect: SoundEffect) {}
}

/// Audio source that only logs (headless runs)
#[derive(Debug, Default, Clone)]
pub struct LogAudio {
    playing: Vec<SoundEffect>,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self, effect: SoundEffect) -> bool {
        self.playing.contains(&effect)
    }
}

impl AudioCue for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("Audio play: {:?}", effect);
        if !self.playing.contains(&effect) {
            self.playing.push(effect);
        }
    }

    fn stop(&mut self, effect: SoundEffect) {
        log::debug!("Audio stop: {:?}", effect);
        self.playing.retain(|e| *e != effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_audio_tracks_playing() {
        let mut audio = LogAudio::new();
        audio.play(SoundEffect::StoneGrind);
        audio.play(SoundEffect::StoneGrind);
        assert!(audio.is_playing(SoundEffect::StoneGrind));
        audio.stop(SoundEffect::StoneGrind);
        assert!(!audio.is_playing(SoundEffect::StoneGrind));
    }
}
