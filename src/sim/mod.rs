//! Deterministic puzzle simulation
//!
//! All puzzle logic lives here. This module must stay pure:
//! - Caller-driven frame step only
//! - Stable iteration order (by statue id)
//! - No rendering, physics or platform dependencies

pub mod animator;
pub mod controller;
pub mod expiry;
pub mod registry;
pub mod sequence;
pub mod state;
pub mod surface;
pub mod tick;

pub use animator::{AnimationStatus, LiftAnimator, MotionKind};
pub use controller::PuzzleController;
pub use expiry::Expiry;
pub use registry::{SceneBindings, StatuePositionRegistry, TagBindings};
pub use sequence::{SequenceMatcher, SequenceOutcome};
pub use state::{
    Contact, ContactOutcome, Decoration, DecorationId, ObjectId, PuzzleEvent, PuzzlePhase,
};
pub use surface::{SurfaceLift, SurfaceTrigger};
pub use tick::{TickInput, tick};
