//! Combat resolution: one path applies range gating, defend halving, dodge
//! negation, HP clamping, and death for every melee strike in the game.

use crate::actor::{Actor, ActorKind};
use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// A strike ready to resolve: world-space origin plus final damage amount.
/// Weapon bonuses are folded into `amount` before resolution.
#[derive(Debug, Clone, Copy)]
pub struct Strike {
    pub origin: Vec3,
    pub amount: i32,
    pub range: f32,
}

impl Strike {
    #[must_use]
    pub fn melee(origin: Vec3, base: i32, weapon_bonus: i32, range: f32) -> Self {
        Self {
            origin,
            amount: base.saturating_add(weapon_bonus),
            range,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Target out of reach; nothing happened.
    Miss,
    /// I-frames were open; the hit was fully negated, defend or not.
    Dodged,
    /// Defend halved the damage (integer floor).
    Blocked { dealt: i32 },
    Hit { dealt: i32 },
    /// Target reached 0 HP. Enemies respawn immediately on a ring around the
    /// killer; `respawned_at` carries the new position. Players stay down.
    Killed { respawned_at: Option<Vec3> },
}

/// Resolve one strike against one target at time `now`.
pub fn resolve_hit(
    strike: &Strike,
    target: &mut Actor,
    now: f64,
    respawn_radius: f32,
    rng: &mut ChaCha8Rng,
) -> Outcome {
    let to = target.tr.pos - strike.origin;
    let dist = Vec3::new(to.x, 0.0, to.z).length();
    if dist > strike.range {
        metrics::counter!("combat.miss").increment(1);
        return Outcome::Miss;
    }
    if target.fsm.dodging(now) {
        metrics::counter!("combat.dodged").increment(1);
        log::debug!("strike dodged by {:?}", target.id);
        return Outcome::Dodged;
    }
    let blocked = target.fsm.defense_active(now);
    let dealt = if blocked {
        strike.amount / 2
    } else {
        strike.amount
    };
    target.hp.apply(-dealt);
    metrics::counter!("combat.hits").increment(1);
    if !target.hp.alive() {
        let respawned_at = match target.kind {
            ActorKind::Enemy => {
                let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
                let pos = strike.origin
                    + Vec3::new(angle.sin() * respawn_radius, 0.0, angle.cos() * respawn_radius);
                target.tr.pos = pos;
                target.hp.hp = target.hp.max;
                target.visible = true;
                log::info!("enemy {:?} felled; respawning at {pos:?}", target.id);
                Some(pos)
            }
            ActorKind::Player => {
                log::info!("{:?} ({:?}) is down", target.id, target.kind);
                None
            }
        };
        return Outcome::Killed { respawned_at };
    }
    if blocked {
        Outcome::Blocked { dealt }
    } else {
        Outcome::Hit { dealt }
    }
}
