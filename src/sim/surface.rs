//! The relic that rises once the puzzle is solved

use glam::Vec3;

use crate::audio::{AudioCue, SoundEffect};
use crate::consts::TOLERANCE;
use crate::move_towards;
use crate::settings::SurfaceSettings;
use crate::ui::TextReveal;

/// Receiver of the single activation signal
pub trait SurfaceTrigger {
    /// Begin rising; called at most once per scene
    fn start_lifting(&mut self);

    /// Advance any motion for `dt` seconds
    fn tick(&mut self, _dt: f32) {}
}

/// Moves its own object from the start position up to a target height,
/// then reveals a text element
pub struct SurfaceLift<T: TextReveal> {
    pub position: Vec3,
    start: Vec3,
    target: Vec3,
    speed: f32,
    moving: bool,
    surfaced: bool,
    audio: Box<dyn AudioCue>,
    text: T,
}

impl<T: TextReveal> SurfaceLift<T> {
    pub fn new(
        start: Vec3,
        settings: &SurfaceSettings,
        mut audio: Box<dyn AudioCue>,
        text: T,
    ) -> Self {
        audio.stop(SoundEffect::RelicRise);
        Self {
            position: start,
            start,
            target: start + Vec3::Y * settings.target_height,
            speed: settings.speed,
            moving: false,
            surfaced: false,
            audio,
            text,
        }
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn is_surfaced(&self) -> bool {
        self.surfaced
    }

    pub fn text(&self) -> &T {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut T {
        &mut self.text
    }
}

impl<T: TextReveal> SurfaceTrigger for SurfaceLift<T> {
    fn start_lifting(&mut self) {
        if self.moving || self.surfaced {
            log::warn!("Surface lift already triggered");
            return;
        }
        log::info!("Relic rising from {:?} to {:?}", self.start, self.target);
        self.audio.play(SoundEffect::RelicRise);
        self.moving = true;
    }

    fn tick(&mut self, dt: f32) {
        if !self.moving {
            return;
        }
        self.position = move_towards(self.position, self.target, self.speed * dt);
        if (self.position.y - self.target.y).abs() < TOLERANCE {
            self.position = self.target;
            self.moving = false;
            self.surfaced = true;
            self.audio.stop(SoundEffect::RelicRise);
            self.text.show();
            log::info!("Relic surfaced");
        }
    }
}
