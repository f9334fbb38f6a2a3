//! Enemy AI: seek the player, strike on contact with a cooldown.

use crate::actor::{ActorId, ActorStore};
use crate::clock::Frame;
use crate::combat::{self, Outcome, Strike};
use crate::systems::movement;
use data_runtime::configs::combat::CombatCfg;
use glam::Vec3;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy)]
pub struct EnemyTuning {
    pub speed: f32,
    pub engage_range: f32,
    pub damage: i32,
    pub cooldown_s: f32,
    pub spawn: Vec3,
    pub respawn_radius: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed: 2.5,
            engage_range: 2.0,
            damage: 8,
            cooldown_s: 1.5,
            spawn: Vec3::new(5.0, 0.0, -10.0),
            respawn_radius: 20.0,
        }
    }
}

impl EnemyTuning {
    #[must_use]
    pub fn from_config(cfg: &CombatCfg) -> Self {
        Self {
            speed: cfg.enemy_speed(),
            engage_range: cfg.enemy_engage_range(),
            damage: cfg.enemy_damage(),
            cooldown_s: cfg.enemy_cooldown_s(),
            spawn: Vec3::new(5.0, 0.0, -10.0),
            respawn_radius: cfg.enemy_respawn_radius(),
        }
    }
}

/// Drive one enemy for one frame. Returns the strike outcome when it attacks.
/// Does nothing while the player is down.
pub fn drive(
    store: &mut ActorStore,
    enemy: ActorId,
    player: ActorId,
    frame: &Frame,
    t: &EnemyTuning,
    rng: &mut ChaCha8Rng,
) -> Option<Outcome> {
    let (player_pos, player_alive) = {
        let p = store.get(player)?;
        (p.tr.pos, p.hp.alive())
    };
    if !player_alive {
        return None;
    }
    let now = frame.elapsed;
    let mut strike = None;
    {
        let e = store.get_mut(enemy)?;
        if !e.hp.alive() {
            return None;
        }
        let to = Vec3::new(player_pos.x - e.tr.pos.x, 0.0, player_pos.z - e.tr.pos.z);
        let dist = to.length();
        if dist > t.engage_range {
            // Close at most to the engage boundary; never overshoot through
            // the player on a long frame.
            let step_speed = t.speed.min((dist - t.engage_range) / frame.dt.max(1e-6));
            movement::steer(e, to, step_speed, frame.dt);
        } else {
            e.tr.yaw = to.x.atan2(to.z);
            if now >= e.next_attack_at {
                e.next_attack_at = now + f64::from(t.cooldown_s);
                strike = Some(Strike::melee(e.tr.pos, t.damage, 0, t.engage_range));
            }
        }
    }
    let strike = strike?;
    let target = store.get_mut(player)?;
    Some(combat::resolve_hit(
        &strike,
        target,
        now,
        t.respawn_radius,
        rng,
    ))
}
