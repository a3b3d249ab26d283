//! Frame-stepped statue motion
//!
//! An animation is plain state (target, speed) advanced by the caller once per
//! frame; it completes once the statue is within tolerance and snaps to target.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::TOLERANCE;
use crate::move_towards;

/// Why a statue is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionKind {
    Lift,
    Lower,
}

/// Result of advancing an animation by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    Running,
    Finished,
}

impl AnimationStatus {
    pub fn is_finished(&self) -> bool {
        *self == AnimationStatus::Finished
    }
}

/// Drives one statue towards a fixed target at a fixed speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiftAnimator {
    pub kind: MotionKind,
    pub target: Vec3,
    /// Units per second
    pub speed: f32,
}

impl LiftAnimator {
    /// Lift from `from` by `amount` along world down
    pub fn lift(from: Vec3, amount: f32, speed: f32) -> Self {
        Self {
            kind: MotionKind::Lift,
            target: from + Vec3::NEG_Y * amount,
            speed,
        }
    }

    /// Lower back to a recorded resting position
    pub fn lower(resting: Vec3, speed: f32) -> Self {
        Self {
            kind: MotionKind::Lower,
            target: resting,
            speed,
        }
    }

    /// Step `position` for `dt` seconds; snaps exactly to target on completion
    pub fn advance(&self, position: &mut Vec3, dt: f32) -> AnimationStatus {
        if position.distance(self.target) > TOLERANCE {
            *position = move_towards(*position, self.target, self.speed * dt);
        }
        if position.distance(self.target) <= TOLERANCE {
            *position = self.target;
            return AnimationStatus::Finished;
        }
        AnimationStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lift_targets_below_start() {
        let anim = LiftAnimator::lift(Vec3::new(1.0, 5.0, 2.0), 0.2, 0.2);
        assert_eq!(anim.kind, MotionKind::Lift);
        assert!((anim.target.y - 4.8).abs() < 1e-6);
        assert_eq!(anim.target.x, 1.0);
        assert_eq!(anim.target.z, 2.0);
    }

    #[test]
    fn test_advance_moves_bounded_distance() {
        let anim = LiftAnimator::lift(Vec3::ZERO, 1.0, 0.5);
        let mut pos = Vec3::ZERO;
        let status = anim.advance(&mut pos, 0.1);
        assert_eq!(status, AnimationStatus::Running);
        assert!((pos.y + 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_advance_snaps_within_tolerance() {
        let anim = LiftAnimator::lower(Vec3::ZERO, 1.0);
        let mut pos = Vec3::new(0.0, -0.005, 0.0);
        assert!(anim.advance(&mut pos, 0.0).is_finished());
        assert_eq!(pos, Vec3::ZERO);
    }

    #[test]
    fn test_zero_amount_finishes_immediately() {
        let start = Vec3::new(3.0, 3.0, 3.0);
        let anim = LiftAnimator::lift(start, 0.0, 0.2);
        let mut pos = start;
        assert!(anim.advance(&mut pos, 1.0 / 60.0).is_finished());
        assert_eq!(pos, start);
    }

    proptest! {
        #[test]
        fn lower_always_lands_exactly_on_rest(
            x in -10.0f32..10.0,
            y in -10.0f32..10.0,
            speed in 0.5f32..5.0,
        ) {
            let rest = Vec3::new(1.0, 2.0, 3.0);
            let anim = LiftAnimator::lower(rest, speed);
            let mut pos = Vec3::new(x, y, 0.0);
            let mut frames = 0;
            while !anim.advance(&mut pos, 1.0 / 60.0).is_finished() {
                frames += 1;
                prop_assert!(frames < 100_000);
            }
            prop_assert_eq!(pos, rest);
        }
    }
}
