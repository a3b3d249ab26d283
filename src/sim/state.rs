//! Puzzle state and core simulation types
//!
//! Everything the controller mutates between frames lives here.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::sequence::SequenceOutcome;
use crate::settings::ConfigError;

/// Opaque handle of a liftable decoration (statue) in the host scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecorationId(pub u32);

/// Opaque handle of any other scene object taking part in a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

/// Current phase of the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzlePhase {
    /// Accepting contacts, sequence empty or partial
    Idle,
    /// Lowering lifted statues back to rest
    Resetting,
    /// Sequence completed, surface lift signaled (terminal)
    Activated,
    /// Rejected configuration, never processes contacts (terminal)
    Disabled,
}

impl PuzzlePhase {
    /// Terminal phases ignore every contact
    pub fn is_terminal(&self) -> bool {
        matches!(self, PuzzlePhase::Activated | PuzzlePhase::Disabled)
    }
}

/// A statue the puzzle can lift and lower
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decoration {
    pub id: DecorationId,
    /// Current world position, written only by animation tasks
    pub position: Vec3,
    /// Set when a lift is dispatched, cleared when a reset sweep finishes
    pub lifted: bool,
    /// A lift animation for this statue is in flight
    pub lift_in_progress: bool,
}

impl Decoration {
    pub fn new(id: DecorationId, position: Vec3) -> Self {
        Self {
            id,
            position,
            lifted: false,
            lift_in_progress: false,
        }
    }
}

/// A single contact reported by the physics host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Tag of the other object
    pub tag: String,
    /// Identity of the other object, if the host knows it
    #[serde(default)]
    pub object: Option<ObjectId>,
    /// Host already classified the other object as terrain
    #[serde(default)]
    pub terrain: bool,
}

impl Contact {
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            object: None,
            terrain: false,
        }
    }

    pub fn with_object(mut self, object: ObjectId) -> Self {
        self.object = Some(object);
        self
    }

    pub fn terrain(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            object: None,
            terrain: true,
        }
    }
}

/// How a contact was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Puzzle is activated, disabled, or mid-reset
    Inert,
    /// Contact with terrain
    Terrain,
    /// Reset object touched; `started` is false when a sweep was already running
    Reset { started: bool },
    /// Tag not bound to any statue
    Unrecognized,
    /// Bound tag; `lifted` is true when a new lift was dispatched
    Classified {
        lifted: bool,
        sequence: SequenceOutcome,
    },
}

/// Notable things that happened during contact handling or ticking
#[derive(Debug, Clone, PartialEq)]
pub enum PuzzleEvent {
    LiftStarted(DecorationId),
    LiftFinished(DecorationId),
    /// In-flight lift superseded by a reset sweep
    LiftCancelled(DecorationId),
    ResetStarted,
    ResetFinished,
    SequenceAdvanced { tag: String, matched: usize },
    SequenceViolation { tag: String },
    UnrecognizedTag { tag: String },
    Activated,
    ConfigurationRejected(ConfigError),
}
