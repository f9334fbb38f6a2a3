//! Replication over the loopback pair: the session introduces itself, spawns
//! and despawns proxies from roster snapshots, smooths move targets, and
//! reports its own position only on ticks where it moved.

use client_core::input::InputState;
use client_core::presenter::{NullPresenter, Presenter};
use client_core::session::{GameSession, SessionTuning};
use data_runtime::item::ItemCatalog;
use glam::Vec3;
use net_core::command::ClientCmd;
use net_core::snapshot::{RosterEntry, ServerMsg, SnapshotDecode};
use net_core::transport::{self, LocalLoopbackTransport, Transport};
use world_core::chunk::GenTuning;

const DT: f32 = 0.1;

#[derive(Default)]
struct Counting {
    spawned: Vec<String>,
    despawned: Vec<String>,
    poses: usize,
}

impl Presenter for Counting {
    fn remote_spawned(&mut self, id: &str, _pos: Vec3) {
        self.spawned.push(id.to_string());
    }
    fn remote_despawned(&mut self, id: &str) {
        self.despawned.push(id.to_string());
    }
    fn remote_pose(&mut self, _id: &str, _pos: Vec3, _moving: bool) {
        self.poses += 1;
    }
}

fn connected_session() -> (GameSession, impl Transport) {
    let mut s = GameSession::new(
        7,
        SessionTuning::default(),
        ItemCatalog::builtin(),
        GenTuning::default(),
    );
    let (client_end, server_end) = LocalLoopbackTransport::new(64);
    s.connect(Box::new(client_end), "tok-1").expect("connect");
    (s, server_end)
}

fn server_says(server: &impl Transport, msg: &ServerMsg) {
    transport::send_msg(server, msg).expect("server send");
}

fn drain_cmds(server: &impl Transport) -> Vec<ClientCmd> {
    transport::recv_payloads(server)
        .iter()
        .map(|b| ClientCmd::decode(&mut &b[..]).expect("client cmd"))
        .collect()
}

#[test]
fn hello_arrives_before_any_movement() {
    let (mut s, server) = connected_session();
    s.step(&InputState::default(), DT, &mut NullPresenter);
    let cmds = drain_cmds(&server);
    assert_eq!(
        cmds,
        vec![ClientCmd::Hello {
            token: "tok-1".into()
        }]
    );
    assert!(s.connected());
}

#[test]
fn roster_spawns_and_despawns_proxies() {
    let (mut s, server) = connected_session();
    let mut hud = Counting::default();
    server_says(&server, &ServerMsg::Welcome { id: "me".into() });
    server_says(
        &server,
        &ServerMsg::Roster {
            entries: vec![
                RosterEntry {
                    id: "me".into(),
                    pos: [0.0; 3],
                },
                RosterEntry {
                    id: "ada".into(),
                    pos: [4.0, 0.0, 4.0],
                },
                RosterEntry {
                    id: "brin".into(),
                    pos: [-4.0, 0.0, 0.0],
                },
            ],
        },
    );
    s.step(&InputState::default(), DT, &mut hud);
    assert_eq!(s.roster().len(), 2, "own id must not become a proxy");
    assert_eq!(hud.spawned, vec!["ada".to_string(), "brin".to_string()]);
    assert_eq!(hud.poses, 2);

    // Next snapshot lost one player.
    server_says(
        &server,
        &ServerMsg::Roster {
            entries: vec![RosterEntry {
                id: "ada".into(),
                pos: [4.0, 0.0, 4.0],
            }],
        },
    );
    s.step(&InputState::default(), DT, &mut hud);
    assert_eq!(s.roster().len(), 1);
    assert_eq!(hud.despawned, vec!["brin".to_string()]);
}

#[test]
fn moves_smooth_toward_the_target() {
    let (mut s, server) = connected_session();
    server_says(
        &server,
        &ServerMsg::Roster {
            entries: vec![RosterEntry {
                id: "ada".into(),
                pos: [0.0; 3],
            }],
        },
    );
    s.step(&InputState::default(), DT, &mut NullPresenter);
    server_says(
        &server,
        &ServerMsg::Moved {
            id: "ada".into(),
            pos: [10.0, 0.0, 0.0],
        },
    );
    // Ten percent of the remaining gap per tick, never a snap.
    s.step(&InputState::default(), DT, &mut NullPresenter);
    let x1 = s.roster().get("ada").unwrap().current.x;
    assert!((x1 - 1.0).abs() < 1e-4);
    s.step(&InputState::default(), DT, &mut NullPresenter);
    let x2 = s.roster().get("ada").unwrap().current.x;
    assert!((x2 - 1.9).abs() < 1e-4);
    for _ in 0..200 {
        s.step(&InputState::default(), DT, &mut NullPresenter);
    }
    let x = s.roster().get("ada").unwrap().current.x;
    assert!((x - 10.0).abs() < 1e-2, "converges onto the target, got {x}");
}

#[test]
fn move_for_untracked_id_is_a_no_op() {
    let (mut s, server) = connected_session();
    server_says(
        &server,
        &ServerMsg::Moved {
            id: "ghost".into(),
            pos: [1.0, 2.0, 3.0],
        },
    );
    s.step(&InputState::default(), DT, &mut NullPresenter);
    assert!(s.roster().is_empty());
}

#[test]
fn position_reports_only_on_moving_ticks() {
    let (mut s, server) = connected_session();
    s.step(&InputState::default(), DT, &mut NullPresenter);
    drain_cmds(&server); // hello

    let walk = InputState {
        forward: true,
        ..Default::default()
    };
    for _ in 0..5 {
        s.step(&walk, DT, &mut NullPresenter);
    }
    for _ in 0..5 {
        s.step(&InputState::default(), DT, &mut NullPresenter);
    }
    let cmds = drain_cmds(&server);
    assert_eq!(cmds.len(), 5, "one report per moving tick: {cmds:?}");
    let mut last_z = 0.0;
    for cmd in cmds {
        let ClientCmd::Move { pos } = cmd else {
            panic!("expected move, got {cmd:?}");
        };
        assert!(pos[2] < last_z, "forward is -z");
        last_z = pos[2];
    }
}
