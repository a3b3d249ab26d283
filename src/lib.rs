//! Statue Lift - collision-sequence puzzle for a sunken-relic scene
//!
//! Core modules:
//! - `sim`: Deterministic puzzle simulation (sequence matching, lift/reset animations)
//! - `settings`: Data-driven scene configuration and fail-fast validation
//! - `audio`: Fire-and-forget audio cue seam
//! - `ui`: Text reveal collaborator
//! - `chat`: NPC conversation state for a remote completion service

pub mod audio;
pub mod chat;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{ConfigError, PuzzleSettings, Settings, SettingsError, SurfaceSettings};

use glam::Vec3;

/// Scene configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one step per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Distance below which an animation snaps to its target
    pub const TOLERANCE: f32 = 0.01;

    /// Statue defaults
    pub const STATUE_LIFT_SPEED: f32 = 0.2;
    pub const STATUE_LIFT_AMOUNT: f32 = 0.2;
    /// Used for lowering when the lift speed is not positive
    pub const RESET_SPEED: f32 = 1.0;

    /// Surfacing object defaults
    pub const SURFACE_HEIGHT: f32 = 2.0;
    pub const SURFACE_SPEED: f32 = 5.0;

    /// Tags
    pub const TERRAIN_TAG: &str = "Terrain";
    pub const RESET_TAG: &str = "ResetObject";
    pub const PLAYER_TAG: &str = "Player";
}

/// Move `current` towards `target` by at most `max_delta`, never overshooting
#[inline]
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let dist = delta.length();
    if dist <= max_delta || dist == 0.0 {
        return target;
    }
    current + delta / dist * max_delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_towards_partial_step() {
        let next = move_towards(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0), 0.25);
        assert!((next.y + 0.25).abs() < 1e-6);
        assert_eq!(next.x, 0.0);
    }

    #[test]
    fn test_move_towards_never_overshoots() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(move_towards(Vec3::ZERO, target, 100.0), target);
    }

    #[test]
    fn test_move_towards_zero_delta_holds() {
        let start = Vec3::new(4.0, 0.0, 0.0);
        assert_eq!(move_towards(start, Vec3::ZERO, 0.0), start);
    }
}
