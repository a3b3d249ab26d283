//! Collision-sequence puzzle controller
//!
//! Contacts are classified synchronously, one at a time. Animations are plain
//! tasks keyed by statue id and advanced only by `tick`, so a contact never
//! observes a half-moved statue.

use std::collections::BTreeMap;

use glam::Vec3;

use super::animator::LiftAnimator;
use super::registry::{StatuePositionRegistry, TagBindings};
use super::sequence::{SequenceMatcher, SequenceOutcome};
use super::state::{
    Contact, ContactOutcome, Decoration, DecorationId, PuzzleEvent, PuzzlePhase,
};
use super::surface::SurfaceTrigger;
use crate::audio::{AudioCue, SoundEffect};
use crate::settings::{ConfigError, PuzzleSettings, ViolationPolicy};

/// Owns the statues, sequence progress and animation tasks of one scene
pub struct PuzzleController<L: SurfaceTrigger> {
    settings: PuzzleSettings,
    phase: PuzzlePhase,
    tags: TagBindings,
    registry: StatuePositionRegistry,
    /// Sorted by id for deterministic stepping
    decorations: BTreeMap<DecorationId, Decoration>,
    matcher: SequenceMatcher,
    lifts: BTreeMap<DecorationId, LiftAnimator>,
    lowers: BTreeMap<DecorationId, LiftAnimator>,
    audio: Box<dyn AudioCue>,
    surface: L,
    events: Vec<PuzzleEvent>,
    config_error: Option<ConfigError>,
}

impl<L: SurfaceTrigger> PuzzleController<L> {
    /// Build the controller; a rejected configuration leaves it permanently disabled
    pub fn new(
        settings: PuzzleSettings,
        placements: &BTreeMap<DecorationId, Vec3>,
        mut audio: Box<dyn AudioCue>,
        surface: L,
    ) -> Self {
        audio.stop(SoundEffect::StoneGrind);
        let matcher = SequenceMatcher::new(settings.required_sequence.clone());
        let mut controller = Self {
            settings,
            phase: PuzzlePhase::Idle,
            tags: TagBindings::default(),
            registry: StatuePositionRegistry::new(),
            decorations: BTreeMap::new(),
            matcher,
            lifts: BTreeMap::new(),
            lowers: BTreeMap::new(),
            audio,
            surface,
            events: Vec::new(),
            config_error: None,
        };

        match controller.settings.validate(placements) {
            Ok(bindings) => {
                controller.decorations = bindings
                    .registry
                    .iter()
                    .map(|(id, pos)| (id, Decoration::new(id, pos)))
                    .collect();
                controller.tags = bindings.tags;
                controller.registry = bindings.registry;
                log::info!(
                    "Statue puzzle ready: {} statues, sequence {:?}",
                    controller.decorations.len(),
                    controller.matcher.required()
                );
            }
            Err(err) => {
                log::error!("Statue puzzle disabled: {}", err);
                controller.phase = PuzzlePhase::Disabled;
                controller
                    .events
                    .push(PuzzleEvent::ConfigurationRejected(err.clone()));
                controller.config_error = Some(err);
            }
        }

        controller
    }

    /// Classify one contact and apply its effects
    pub fn on_collision(&mut self, contact: &Contact) -> ContactOutcome {
        if self.phase.is_terminal() {
            log::debug!("Ignoring contact '{}' in {:?}", contact.tag, self.phase);
            return ContactOutcome::Inert;
        }

        if contact.terrain || contact.tag == self.settings.terrain_tag {
            return ContactOutcome::Terrain;
        }

        let is_reset_object =
            contact.object.is_some() && contact.object == self.settings.reset_object;
        if is_reset_object || contact.tag == self.settings.reset_tag {
            log::info!("Reset collision detected");
            let started = self.begin_reset();
            return ContactOutcome::Reset { started };
        }

        if self.phase == PuzzlePhase::Resetting {
            log::debug!("Ignoring contact '{}' while resetting", contact.tag);
            return ContactOutcome::Inert;
        }

        let Some(id) = self.tags.get(&contact.tag) else {
            log::info!("Collided with an unallowed tag: {}", contact.tag);
            self.events.push(PuzzleEvent::UnrecognizedTag {
                tag: contact.tag.clone(),
            });
            return ContactOutcome::Unrecognized;
        };

        let lifted = self.try_lift(id);
        let sequence = self.matcher.observe(&contact.tag);
        match sequence {
            SequenceOutcome::Advanced { matched } => {
                log::info!(
                    "Correct sequence collision: {}. Current sequence: {}",
                    contact.tag,
                    self.matcher.progress().join(", ")
                );
                self.events.push(PuzzleEvent::SequenceAdvanced {
                    tag: contact.tag.clone(),
                    matched,
                });
            }
            SequenceOutcome::Completed => {
                self.events.push(PuzzleEvent::SequenceAdvanced {
                    tag: contact.tag.clone(),
                    matched: self.matcher.progress().len(),
                });
                self.activate();
            }
            SequenceOutcome::Violation => {
                log::info!("Wrong sequence or unexpected collision: {}", contact.tag);
                self.events.push(PuzzleEvent::SequenceViolation {
                    tag: contact.tag.clone(),
                });
                if self.settings.violation_policy == ViolationPolicy::Reset {
                    self.begin_reset();
                }
            }
            SequenceOutcome::Ignored => {
                log::debug!("Sequence tag '{}' touched out of order", contact.tag);
            }
        }

        ContactOutcome::Classified { lifted, sequence }
    }

    /// Advance every in-flight animation by `dt` seconds, then the surface lift
    pub fn tick(&mut self, dt: f32) {
        if self.phase == PuzzlePhase::Disabled {
            return;
        }

        let mut finished = Vec::new();
        for (id, anim) in &self.lifts {
            match self.decorations.get_mut(id) {
                Some(deco) => {
                    if anim.advance(&mut deco.position, dt).is_finished() {
                        deco.lift_in_progress = false;
                        finished.push(*id);
                    }
                }
                None => finished.push(*id),
            }
        }
        for id in finished.drain(..) {
            self.lifts.remove(&id);
            self.events.push(PuzzleEvent::LiftFinished(id));
        }

        if self.phase == PuzzlePhase::Resetting {
            for (id, anim) in &self.lowers {
                match self.decorations.get_mut(id) {
                    Some(deco) => {
                        if anim.advance(&mut deco.position, dt).is_finished() {
                            finished.push(*id);
                        }
                    }
                    None => finished.push(*id),
                }
            }
            for id in finished.drain(..) {
                self.lowers.remove(&id);
            }
            if self.lowers.is_empty() {
                self.finish_reset();
            }
        }

        self.surface.tick(dt);
    }

    /// Dispatch a lift for `id` unless it is already lifted or lifting
    fn try_lift(&mut self, id: DecorationId) -> bool {
        let Some(deco) = self.decorations.get_mut(&id) else {
            log::warn!("Bound statue {:?} is missing", id);
            return false;
        };
        if deco.lifted || deco.lift_in_progress {
            return false;
        }

        let speed = self.settings.lowering_speed();
        self.lifts.insert(
            id,
            LiftAnimator::lift(deco.position, self.settings.lift_amount, speed),
        );
        // Marked at dispatch so a second contact cannot re-trigger mid-animation
        deco.lifted = true;
        deco.lift_in_progress = true;
        self.audio.play(SoundEffect::StoneGrind);
        self.events.push(PuzzleEvent::LiftStarted(id));
        true
    }

    /// Start lowering every lifted statue; false if a sweep is already running
    fn begin_reset(&mut self) -> bool {
        if self.phase == PuzzlePhase::Resetting {
            log::debug!("Reset already running");
            return false;
        }

        self.phase = PuzzlePhase::Resetting;
        self.audio.play(SoundEffect::StoneGrind);
        self.matcher.clear();
        self.events.push(PuzzleEvent::ResetStarted);

        // A reset supersedes any lift still in flight
        for id in std::mem::take(&mut self.lifts).into_keys() {
            if let Some(deco) = self.decorations.get_mut(&id) {
                deco.lift_in_progress = false;
            }
            self.events.push(PuzzleEvent::LiftCancelled(id));
        }

        let speed = self.settings.lowering_speed();
        for deco in self.decorations.values().filter(|d| d.lifted) {
            match self.registry.resting_position(deco.id) {
                Some(rest) => {
                    self.lowers.insert(deco.id, LiftAnimator::lower(rest, speed));
                }
                None => log::warn!("No resting position for statue {:?}, skipping", deco.id),
            }
        }

        if self.lowers.is_empty() {
            self.finish_reset();
        }
        true
    }

    fn finish_reset(&mut self) {
        for deco in self.decorations.values_mut() {
            deco.lifted = false;
        }
        self.phase = PuzzlePhase::Idle;
        self.events.push(PuzzleEvent::ResetFinished);
        log::info!("Reset finished");
    }

    fn activate(&mut self) {
        self.phase = PuzzlePhase::Activated;
        self.surface.start_lifting();
        self.events.push(PuzzleEvent::Activated);
        log::info!("Lift activated!");
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn is_enabled(&self) -> bool {
        self.phase != PuzzlePhase::Disabled
    }

    pub fn is_activated(&self) -> bool {
        self.phase == PuzzlePhase::Activated
    }

    pub fn config_error(&self) -> Option<&ConfigError> {
        self.config_error.as_ref()
    }

    pub fn settings(&self) -> &PuzzleSettings {
        &self.settings
    }

    /// Tags matched so far
    pub fn progress(&self) -> &[String] {
        self.matcher.progress()
    }

    pub fn decoration(&self, id: DecorationId) -> Option<&Decoration> {
        self.decorations.get(&id)
    }

    /// Statues in id order
    pub fn decorations(&self) -> impl Iterator<Item = &Decoration> {
        self.decorations.values()
    }

    pub fn resting_position(&self, id: DecorationId) -> Option<Vec3> {
        self.registry.resting_position(id)
    }

    pub fn lifts_in_flight(&self) -> usize {
        self.lifts.len()
    }

    /// Any lift or reset task still running
    pub fn is_animating(&self) -> bool {
        !self.lifts.is_empty() || !self.lowers.is_empty()
    }

    pub fn surface(&self) -> &L {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut L {
        &mut self.surface
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }
}
