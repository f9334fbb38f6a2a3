//! Pose sampling: a pure function of actor state and time, consumed by the
//! presenter. Angles are radians on a simple humanoid rig.

use crate::actions::ActionKind;
use crate::actor::Actor;
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    /// Body height offset; dodge reads as a brief crouch.
    pub body_offset_y: f32,
    pub left_arm_pitch: f32,
    pub right_arm_pitch: f32,
    /// Raised guard while defending.
    pub left_arm_roll: f32,
    pub left_leg_pitch: f32,
    pub right_leg_pitch: f32,
}

/// Walk-cycle frequency (rad/s) and swing amplitude.
const SWING_RATE: f64 = 10.0;
const SWING_AMPL: f32 = 0.6;
/// Crouch depth while the dodge dip window is live.
const DODGE_DIP: f32 = -0.2;

#[must_use]
pub fn sample(actor: &Actor, now: f64, moving: bool) -> Pose {
    let mut pose = Pose::default();
    let swing = if moving {
        ((now * SWING_RATE).sin() as f32) * SWING_AMPL
    } else {
        0.0
    };
    pose.left_leg_pitch = swing;
    pose.right_leg_pitch = -swing;
    // Arms swing only when free: locks and the guard own the arms.
    if !actor.fsm.locked(now) && !actor.fsm.defense_active(now) {
        pose.left_arm_pitch = -swing;
        pose.right_arm_pitch = swing;
    }
    match actor.fsm.pose(now) {
        Some(ActionKind::Light) => pose.right_arm_pitch = -FRAC_PI_2,
        Some(ActionKind::Heavy) => pose.right_arm_pitch = -(PI / 1.5),
        Some(ActionKind::Dodge) => pose.body_offset_y = DODGE_DIP,
        None => {}
    }
    if actor.fsm.defense_active(now) {
        pose.left_arm_roll = FRAC_PI_2;
    }
    pose
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionTuning;
    use crate::actor::{ActorKind, ActorStore, Health};
    use glam::Vec3;

    fn actor() -> Actor {
        let mut s = ActorStore::default();
        let id = s.spawn(ActorKind::Player, Vec3::ZERO, Health::new(100));
        s.get(id).unwrap().clone()
    }

    #[test]
    fn idle_is_the_zero_pose() {
        let a = actor();
        assert_eq!(sample(&a, 3.0, false), Pose::default());
    }

    #[test]
    fn walking_swings_legs_in_antiphase() {
        let a = actor();
        let p = sample(&a, 0.05, true);
        assert!(p.left_leg_pitch > 0.0);
        assert!((p.left_leg_pitch + p.right_leg_pitch).abs() < f32::EPSILON);
        assert!((p.left_arm_pitch + p.left_leg_pitch).abs() < f32::EPSILON);
    }

    #[test]
    fn light_attack_raises_the_sword_arm() {
        let mut a = actor();
        let t = ActionTuning::default();
        a.fsm.try_start(ActionKind::Light, 1.0, &t);
        let p = sample(&a, 1.1, true);
        assert!((p.right_arm_pitch - (-FRAC_PI_2)).abs() < 1e-6);
        // The pose window closes before the lock does.
        let p = sample(&a, 1.3, true);
        assert!((p.right_arm_pitch - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn heavy_winds_further_than_light() {
        let mut a = actor();
        let t = ActionTuning::default();
        a.fsm.try_start(ActionKind::Heavy, 0.0, &t);
        let p = sample(&a, 0.1, false);
        assert!(p.right_arm_pitch < -FRAC_PI_2);
    }

    #[test]
    fn dodge_dips_then_recovers() {
        let mut a = actor();
        let t = ActionTuning::default();
        a.fsm.try_start(ActionKind::Dodge, 0.0, &t);
        assert!((sample(&a, 0.1, false).body_offset_y - DODGE_DIP).abs() < f32::EPSILON);
        assert!((sample(&a, 0.25, false).body_offset_y - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn guard_holds_the_off_arm() {
        let mut a = actor();
        a.fsm.set_defending(true);
        let p = sample(&a, 2.0, true);
        assert!((p.left_arm_roll - FRAC_PI_2).abs() < f32::EPSILON);
        assert!((p.left_arm_pitch - 0.0).abs() < f32::EPSILON);
        // Legs keep walking under the guard.
        assert!(p.left_leg_pitch.abs() > 0.0);
    }
}
