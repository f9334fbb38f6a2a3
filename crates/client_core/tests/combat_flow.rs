//! End-to-end combat through the session: the enemy closes to engage range,
//! exchanged blows land on both sides, and a felled enemy reappears on the
//! respawn ring at full health.

use client_core::input::InputState;
use client_core::presenter::NullPresenter;
use client_core::session::{GameSession, SessionTuning};
use data_runtime::item::ItemCatalog;
use world_core::chunk::GenTuning;

const DT: f32 = 0.1;

fn session() -> GameSession {
    GameSession::new(
        7,
        SessionTuning::default(),
        ItemCatalog::builtin(),
        GenTuning::default(),
    )
}

fn idle(s: &mut GameSession, steps: usize) {
    let input = InputState::default();
    for _ in 0..steps {
        s.step(&input, DT, &mut NullPresenter);
    }
}

#[test]
fn light_attacks_fell_the_enemy_onto_the_respawn_ring() {
    let mut s = session();
    // Let the enemy walk in from (5, 0, -10) and settle at engage range.
    idle(&mut s, 45);
    let dist = s.enemy().unwrap().tr.pos.length();
    assert!(
        (1.9..=2.1).contains(&dist),
        "enemy should hold at engage range, got {dist}"
    );

    // 100 HP at 8 per light: the 13th blow kills.
    let press = InputState {
        light_pressed: true,
        ..Default::default()
    };
    for blow in 1..=13 {
        s.step(&press, DT, &mut NullPresenter);
        let hp = s.enemy().unwrap().hp.hp;
        if blow < 13 {
            assert_eq!(hp, 100 - 8 * blow, "after blow {blow}");
        } else {
            // Killed: back to full health on the ring around the player.
            assert_eq!(hp, 100);
            let player = s.player().unwrap().tr.pos;
            let respawned = s.enemy().unwrap().tr.pos;
            assert!((respawned.distance(player) - 20.0).abs() < 1e-2);
            assert!(s.enemy().unwrap().visible);
        }
        // Let the attack lock expire before the next press.
        idle(&mut s, 5);
    }

    // The enemy traded hits meanwhile, but nowhere near a kill.
    let hp = s.player().unwrap().hp.hp;
    assert!(hp < 100, "enemy strikes should have landed");
    assert!(hp > 40);
    assert!(!s.game_over());
}

#[test]
fn held_charge_releases_a_heavy_blow() {
    let mut s = session();
    idle(&mut s, 45);

    let mut input = InputState {
        heavy_held: true,
        ..Default::default()
    };
    // Hold well past the 1.0 s threshold, then release.
    for _ in 0..12 {
        s.step(&input, DT, &mut NullPresenter);
    }
    input.heavy_held = false;
    s.step(&input, DT, &mut NullPresenter);
    assert_eq!(s.enemy().unwrap().hp.hp, 75);
}

#[test]
fn short_tap_charge_does_nothing() {
    let mut s = session();
    idle(&mut s, 45);

    let mut input = InputState {
        heavy_held: true,
        ..Default::default()
    };
    for _ in 0..5 {
        s.step(&input, DT, &mut NullPresenter);
    }
    input.heavy_held = false;
    s.step(&input, DT, &mut NullPresenter);
    assert_eq!(s.enemy().unwrap().hp.hp, 100);
}

#[test]
fn guard_halves_the_enemy_strike() {
    let mut s = session();
    let guard = InputState {
        defend: true,
        ..Default::default()
    };
    // Hold the guard the whole walk-in; the first strike lands halved.
    for _ in 0..45 {
        s.step(&guard, DT, &mut NullPresenter);
    }
    let hp = s.player().unwrap().hp.hp;
    assert!(hp >= 92, "strikes must land at 4, not 8; hp {hp}");
    assert!(hp < 100, "at least one strike should have landed");
    assert_eq!((100 - hp) % 4, 0);
}
