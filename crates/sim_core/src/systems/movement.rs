//! Planar locomotion, yaw facing, gravity and jumping.

use crate::actor::Actor;
use glam::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct MoveTuning {
    pub speed: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
}

impl Default for MoveTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            gravity: 20.0,
            jump_impulse: 10.0,
        }
    }
}

/// Step the actor along the planar component of `dir` and face the motion.
/// A zero direction leaves position and yaw untouched.
pub fn steer(actor: &mut Actor, dir: Vec3, speed: f32, dt: f32) {
    let planar = Vec3::new(dir.x, 0.0, dir.z);
    if planar.length_squared() <= 1e-6 {
        return;
    }
    let d = planar.normalize();
    actor.tr.pos.x += d.x * speed * dt;
    actor.tr.pos.z += d.z * speed * dt;
    actor.tr.yaw = d.x.atan2(d.z);
}

/// Vertical integration: jump impulse (caller edge-filters the press) plus
/// gravity down to the ground plane at y = 0.
pub fn fall(actor: &mut Actor, jump: bool, dt: f32, t: &MoveTuning) {
    if jump && !actor.airborne {
        actor.vel_y = t.jump_impulse;
        actor.airborne = true;
    }
    if actor.airborne {
        actor.vel_y -= t.gravity * dt;
        actor.tr.pos.y += actor.vel_y * dt;
        if actor.tr.pos.y <= 0.0 {
            actor.tr.pos.y = 0.0;
            actor.vel_y = 0.0;
            actor.airborne = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{ActorKind, ActorStore, Health};

    fn actor() -> Actor {
        let mut s = ActorStore::default();
        let id = s.spawn(ActorKind::Player, Vec3::ZERO, Health::new(100));
        s.get(id).unwrap().clone()
    }

    #[test]
    fn steer_normalizes_diagonals() {
        let mut a = actor();
        steer(&mut a, Vec3::new(1.0, 0.0, 1.0), 5.0, 1.0);
        assert!((a.tr.pos.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn yaw_faces_motion() {
        let mut a = actor();
        steer(&mut a, Vec3::new(1.0, 0.0, 0.0), 5.0, 0.016);
        assert!((a.tr.yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn jump_arcs_and_lands() {
        let mut a = actor();
        let t = MoveTuning::default();
        fall(&mut a, true, 0.016, &t);
        assert!(a.airborne);
        assert!(a.tr.pos.y > 0.0);
        // A held jump key must not double-jump mid-air.
        for _ in 0..200 {
            fall(&mut a, true, 0.016, &t);
            if !a.airborne {
                break;
            }
        }
        assert!(!a.airborne);
        assert!((a.tr.pos.y - 0.0).abs() < f32::EPSILON);
        assert!((a.vel_y - 0.0).abs() < f32::EPSILON);
    }
}
