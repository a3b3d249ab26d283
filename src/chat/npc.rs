//! A talkable NPC: proximity, personality prompt and talk animation parameter

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::PLAYER_TAG;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful shopkeeper named Bob. You are friendly, \
slightly grumpy, and know about the items in your shop. You keep your responses concise.";

/// Animator value meaning "not talking"
pub const IDLE_TALK_VALUE: i32 = 0;

#[derive(Debug, Clone)]
pub struct NpcInteraction {
    name: String,
    system_prompt: String,
    player_tag: String,
    player_nearby: bool,
    /// Talk animation parameter (0 idle, 1 or 2 for a talk variant)
    talk_value: i32,
    rng: Pcg32,
}

impl NpcInteraction {
    pub fn new(name: impl Into<String>, system_prompt: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            system_prompt: system_prompt.into(),
            player_tag: PLAYER_TAG.to_string(),
            player_nearby: false,
            talk_value: IDLE_TALK_VALUE,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn with_player_tag(mut self, tag: impl Into<String>) -> Self {
        self.player_tag = tag.into();
        self
    }

    /// Something entered the interaction trigger
    pub fn on_trigger_enter(&mut self, tag: &str) {
        if tag == self.player_tag {
            self.player_nearby = true;
            log::info!("Player entered interaction range for {}", self.name);
        }
    }

    /// Something left the interaction trigger
    pub fn on_trigger_exit(&mut self, tag: &str) {
        if tag == self.player_tag {
            self.player_nearby = false;
            log::info!("Player exited interaction range for {}", self.name);
        }
    }

    /// Interaction key pressed; true when a chat should start
    pub fn interact(&self) -> bool {
        if self.player_nearby {
            log::info!("Interaction started with {}", self.name);
        }
        self.player_nearby
    }

    /// A reply arrived (true) or the conversation went quiet (false)
    pub fn on_interaction_state_changed(&mut self, talking: bool) {
        self.talk_value = if talking {
            self.rng.random_range(1..=2)
        } else {
            IDLE_TALK_VALUE
        };
        log::debug!("{} talk animation set to {}", self.name, self.talk_value);
    }

    /// Talk animation finished; back to idle
    pub fn stop_talking(&mut self) {
        self.talk_value = IDLE_TALK_VALUE;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn is_player_nearby(&self) -> bool {
        self.player_nearby
    }

    pub fn talk_value(&self) -> i32 {
        self.talk_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_player_counts_as_nearby() {
        let mut npc = NpcInteraction::new("Bob", DEFAULT_SYSTEM_PROMPT, 1);
        npc.on_trigger_enter("Terrain");
        assert!(!npc.interact());
        npc.on_trigger_enter("Player");
        assert!(npc.interact());
        npc.on_trigger_exit("Player");
        assert!(!npc.is_player_nearby());
    }

    #[test]
    fn test_custom_player_tag() {
        let mut npc = NpcInteraction::new("Bob", "", 1).with_player_tag("Diver");
        npc.on_trigger_enter("Player");
        assert!(!npc.is_player_nearby());
        npc.on_trigger_enter("Diver");
        assert!(npc.is_player_nearby());
    }

    #[test]
    fn test_talk_value_picks_one_or_two() {
        let mut npc = NpcInteraction::new("Bob", "", 7);
        for _ in 0..50 {
            npc.on_interaction_state_changed(true);
            assert!((1..=2).contains(&npc.talk_value()));
        }
        npc.stop_talking();
        assert_eq!(npc.talk_value(), IDLE_TALK_VALUE);
    }

    #[test]
    fn test_same_seed_same_animation() {
        let mut a = NpcInteraction::new("Bob", "", 42);
        let mut b = NpcInteraction::new("Bob", "", 42);
        for _ in 0..10 {
            a.on_interaction_state_changed(true);
            b.on_interaction_state_changed(true);
            assert_eq!(a.talk_value(), b.talk_value());
        }
    }
}
