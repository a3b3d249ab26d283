//! Scene settings
//!
//! Loaded once before the first frame. The puzzle section is validated
//! fail-fast; a rejected configuration disables the controller for the scene.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chat::ChatSettings;
use crate::consts::*;
use crate::sim::{DecorationId, ObjectId, SceneBindings};

/// Misconfiguration detected while building the puzzle
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("allowed tags ({tags}) and linked statues ({statues}) must have the same length")]
    MismatchedBindings { tags: usize, statues: usize },
    #[error("binding {index} needs both a tag and a linked statue")]
    UnassignedBinding { index: usize },
    #[error("tag '{0}' is bound more than once")]
    DuplicateTag(String),
    #[error("statue {0:?} is linked to more than one tag")]
    DuplicateStatue(DecorationId),
    #[error("statue {0:?} has no placement in the scene")]
    UnplacedStatue(DecorationId),
    #[error("required sequence must contain at least one tag")]
    EmptySequence,
    #[error("reset object is not assigned")]
    MissingResetObject,
    #[error("reset speed must be positive when the lift speed is not (got {0})")]
    NoUsableSpeed(f32),
}

/// Failure to read or decode a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What a sequence violation does to progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationPolicy {
    /// Logged only, progress kept
    #[default]
    Inert,
    /// Runs the full reset sweep
    Reset,
}

/// Statue puzzle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleSettings {
    /// Collision tags, paired by index with `linked_statues`
    pub allowed_tags: Vec<String>,
    pub linked_statues: Vec<Option<DecorationId>>,
    /// Tags that must be touched in exactly this order
    pub required_sequence: Vec<String>,
    pub terrain_tag: String,
    pub reset_object: Option<ObjectId>,
    pub reset_tag: String,
    /// Units per second for lifting and lowering
    pub lift_speed: f32,
    pub lift_amount: f32,
    /// Lowering speed used when `lift_speed` is not positive
    pub reset_speed: f32,
    pub violation_policy: ViolationPolicy,
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            allowed_tags: Vec::new(),
            linked_statues: Vec::new(),
            required_sequence: Vec::new(),
            terrain_tag: TERRAIN_TAG.to_string(),
            reset_object: None,
            reset_tag: RESET_TAG.to_string(),
            lift_speed: STATUE_LIFT_SPEED,
            lift_amount: STATUE_LIFT_AMOUNT,
            reset_speed: RESET_SPEED,
            violation_policy: ViolationPolicy::Inert,
        }
    }
}

impl PuzzleSettings {
    /// Speed used to lower statues during a reset sweep
    pub fn lowering_speed(&self) -> f32 {
        if self.lift_speed > 0.0 {
            self.lift_speed
        } else {
            self.reset_speed
        }
    }

    /// Check bindings against scene placements and record resting positions
    pub fn validate(
        &self,
        placements: &BTreeMap<DecorationId, Vec3>,
    ) -> Result<SceneBindings, ConfigError> {
        if self.allowed_tags.len() != self.linked_statues.len() {
            return Err(ConfigError::MismatchedBindings {
                tags: self.allowed_tags.len(),
                statues: self.linked_statues.len(),
            });
        }

        let mut bindings = SceneBindings::default();
        for (index, (tag, statue)) in self
            .allowed_tags
            .iter()
            .zip(&self.linked_statues)
            .enumerate()
        {
            let Some(id) = statue.filter(|_| !tag.is_empty()) else {
                return Err(ConfigError::UnassignedBinding { index });
            };
            let position = placements
                .get(&id)
                .copied()
                .ok_or(ConfigError::UnplacedStatue(id))?;
            if !bindings.registry.record(id, position) {
                return Err(ConfigError::DuplicateStatue(id));
            }
            if !bindings.tags.bind(tag, id) {
                return Err(ConfigError::DuplicateTag(tag.clone()));
            }
        }

        if self.required_sequence.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        if self.reset_object.is_none() {
            return Err(ConfigError::MissingResetObject);
        }
        if self.lift_speed <= 0.0 && self.reset_speed <= 0.0 {
            return Err(ConfigError::NoUsableSpeed(self.reset_speed));
        }

        if self.lift_speed <= 0.0 {
            log::warn!(
                "Lift speed {} is not positive, statues will move at reset speed {}",
                self.lift_speed,
                self.reset_speed
            );
        }
        for tag in &self.required_sequence {
            if !bindings.tags.contains(tag) {
                log::warn!("Sequence tag '{}' has no linked statue and can never match", tag);
            }
        }

        Ok(bindings)
    }
}

/// Rising object configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    /// Height above the start position to rise to
    pub target_height: f32,
    /// Units per second
    pub speed: f32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            target_height: SURFACE_HEIGHT,
            speed: SURFACE_SPEED,
        }
    }
}

/// Complete scene settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub puzzle: PuzzleSettings,
    pub surface: SurfaceSettings,
    pub chat: ChatSettings,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
