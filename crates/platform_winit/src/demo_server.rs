//! In-process roster feed behind the `demo_server` feature.
//!
//! Stands in for a real endpoint during development: answers the handshake,
//! publishes roster snapshots, and walks a few bots around the origin so the
//! replication path carries live traffic. One bot drops in and out on a
//! timer to exercise despawn handling.

use glam::Vec3;
use net_core::command::ClientCmd;
use net_core::snapshot::{RosterEntry, ServerMsg, SnapshotDecode};
use net_core::transport::{self, LocalLoopbackTransport};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

const BOT_SPEED: f32 = 1.6;
const ROSTER_EVERY_S: f64 = 2.0;
const DRIFTER_FLIP_EVERY_S: f64 = 7.0;
/// Stall clamp so a debugger pause does not teleport the bots.
const MAX_STEP_DT: f32 = 0.25;

struct Bot {
    id: String,
    pos: Vec3,
    heading: f32,
}

pub struct DemoServer {
    link: LocalLoopbackTransport,
    bots: Vec<Bot>,
    rng: ChaCha8Rng,
    last_step: Instant,
    next_roster_in: f64,
    drifter_away: bool,
    drifter_flip_in: f64,
    player_pos: [f32; 3],
    greeted: bool,
}

impl DemoServer {
    pub fn new(link: LocalLoopbackTransport) -> Self {
        // Three regulars plus the drifter, ringed around spawn.
        let bots = (0..4)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::TAU / 4.0;
                Bot {
                    id: format!("bot-{}", i + 1),
                    pos: Vec3::new(angle.cos() * 8.0, 0.0, angle.sin() * 8.0),
                    heading: angle,
                }
            })
            .collect();
        Self {
            link,
            bots,
            rng: ChaCha8Rng::seed_from_u64(7),
            last_step: Instant::now(),
            next_roster_in: 0.0,
            drifter_away: false,
            drifter_flip_in: DRIFTER_FLIP_EVERY_S,
            player_pos: [0.0; 3],
            greeted: false,
        }
    }

    /// One server frame: drain client commands, wander the bots, publish.
    pub fn step(&mut self) {
        let dt = self.last_step.elapsed().as_secs_f32().min(MAX_STEP_DT);
        self.last_step = Instant::now();

        for payload in transport::recv_payloads(&self.link) {
            match ClientCmd::decode(&mut payload.as_slice()) {
                Ok(ClientCmd::Hello { token }) => {
                    log::info!("demo server: hello ({token})");
                    self.greeted = true;
                    self.send(&ServerMsg::Welcome {
                        id: "player".into(),
                    });
                    self.next_roster_in = 0.0;
                }
                Ok(ClientCmd::Move { pos }) => {
                    self.player_pos = pos;
                    log::trace!("demo server: player at {pos:?}");
                }
                Err(e) => log::warn!("demo server: bad command: {e:#}"),
            }
        }
        if !self.greeted {
            return;
        }

        for bot in &mut self.bots {
            bot.heading += self.rng.gen_range(-0.8..0.8) * dt;
            bot.pos.x += bot.heading.cos() * BOT_SPEED * dt;
            bot.pos.z += bot.heading.sin() * BOT_SPEED * dt;
        }

        self.drifter_flip_in -= f64::from(dt);
        if self.drifter_flip_in <= 0.0 {
            self.drifter_flip_in = DRIFTER_FLIP_EVERY_S;
            self.drifter_away = !self.drifter_away;
            // Force a snapshot so the flip is visible immediately.
            self.next_roster_in = 0.0;
        }

        self.next_roster_in -= f64::from(dt);
        if self.next_roster_in <= 0.0 {
            self.next_roster_in = ROSTER_EVERY_S;
            let mut entries = vec![RosterEntry {
                id: "player".into(),
                pos: self.player_pos,
            }];
            entries.extend(self.present().iter().map(|b| RosterEntry {
                id: b.id.clone(),
                pos: b.pos.to_array(),
            }));
            self.send(&ServerMsg::Roster { entries });
        } else {
            for bot in self.present() {
                self.send(&ServerMsg::Moved {
                    id: bot.id.clone(),
                    pos: bot.pos.to_array(),
                });
            }
        }
    }

    /// Bots currently in the roster; the drifter sits out while away.
    fn present(&self) -> &[Bot] {
        if self.drifter_away {
            &self.bots[..3]
        } else {
            &self.bots
        }
    }

    fn send(&self, msg: &ServerMsg) {
        if let Err(e) = transport::send_msg(&self.link, msg) {
            log::warn!("demo server: send failed: {e:#}");
        }
    }
}
