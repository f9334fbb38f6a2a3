//! Full melee exchange over the actor store: armed player versus the stock
//! enemy, both directions through the one resolver.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sim_core::actions::{ActionKind, ActionTuning};
use sim_core::actor::{ActorKind, ActorStore, Health};
use sim_core::clock::Frame;
use sim_core::combat::{self, Outcome, Strike};
use sim_core::systems::enemy::{self, EnemyTuning};

#[test]
fn armed_lights_fell_the_enemy_and_it_returns_on_the_ring() {
    let mut store = ActorStore::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let t = ActionTuning::default();
    let player = store.spawn(ActorKind::Player, Vec3::ZERO, Health::new(100));
    let enemy_id = store.spawn(ActorKind::Enemy, Vec3::new(0.0, 0.0, 2.0), Health::new(100));

    // Sword in hand: 8 base + 5 bonus per light swing.
    let mut now = 0.0_f64;
    let mut felled = false;
    for _ in 0..8 {
        let p = store.get_mut(player).unwrap();
        assert!(p.fsm.try_start(ActionKind::Light, now, &t));
        let strike = Strike::melee(p.tr.pos, t.light_damage, 5, t.melee_range);
        let enemy = store.get_mut(enemy_id).unwrap();
        let out = combat::resolve_hit(&strike, enemy, now, 20.0, &mut rng);
        match out {
            Outcome::Hit { dealt } => assert_eq!(dealt, 13),
            Outcome::Killed {
                respawned_at: Some(pos),
            } => {
                // 100 / 13 rounds up to 8 swings.
                assert!((pos.length() - 20.0).abs() < 1e-3);
                let e = store.get(enemy_id).unwrap();
                assert_eq!(e.hp.hp, e.hp.max);
                felled = true;
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        now += f64::from(t.light_lock_s);
    }
    assert!(felled, "eight armed lights must fell a 100 HP enemy");
}

#[test]
fn guard_outlasts_an_unarmed_trade() {
    let mut store = ActorStore::default();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let et = EnemyTuning::default();
    let player = store.spawn(ActorKind::Player, Vec3::ZERO, Health::new(100));
    let enemy_id = store.spawn(ActorKind::Enemy, Vec3::new(0.0, 0.0, 1.5), Health::new(100));
    store.get_mut(player).unwrap().fsm.set_defending(true);

    let mut elapsed = 0.0_f64;
    let mut blocked_hits = 0;
    for _ in 0..40 {
        elapsed += 0.1;
        let frame = Frame { dt: 0.1, elapsed };
        if let Some(out) = enemy::drive(&mut store, enemy_id, player, &frame, &et, &mut rng) {
            assert_eq!(out, Outcome::Blocked { dealt: 4 });
            blocked_hits += 1;
        }
    }
    // 4 s at a 1.5 s cooldown: three strikes land, each halved.
    assert_eq!(blocked_hits, 3);
    assert_eq!(store.get(player).unwrap().hp.hp, 100 - 3 * 4);
}
