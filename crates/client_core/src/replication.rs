//! Remote proxy reconciliation.
//!
//! The roster snapshot is authoritative for presence: unknown ids spawn a
//! proxy, absent ids despawn theirs. Positions are never snapped; every
//! update only moves the interpolation target, and `step` closes a fixed
//! fraction of the remaining distance each tick so proxy motion stays
//! continuous between infrequent network updates.

use glam::Vec3;
use net_core::snapshot::{RosterEntry, ServerMsg, SnapshotDecode};

/// Fraction of the remaining distance closed per tick.
pub const SMOOTHING: f32 = 0.1;

/// One tracked remote entity: the drawn position and where it is headed.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteProxy {
    pub id: String,
    pub current: Vec3,
    pub target: Vec3,
}

/// Presence changes from applying messages, drained by the session.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RosterEvents {
    pub spawned: Vec<String>,
    pub despawned: Vec<String>,
}

#[derive(Debug, Default)]
pub struct RemoteRoster {
    own_id: Option<String>,
    /// Kept in roster order; the HUD lists proxies in arrival order.
    proxies: Vec<RemoteProxy>,
    events: RosterEvents,
}

impl RemoteRoster {
    #[must_use]
    pub fn own_id(&self) -> Option<&str> {
        self.own_id.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RemoteProxy> {
        self.proxies.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RemoteProxy> {
        self.proxies.iter()
    }

    /// Apply one raw message payload. Returns whether any state changed.
    /// A payload that fails to decode is dropped here; one bad event must
    /// not stall the feed.
    pub fn apply_message(&mut self, bytes: &[u8]) -> bool {
        let mut slice: &[u8] = bytes;
        match ServerMsg::decode(&mut slice) {
            Ok(ServerMsg::Welcome { id }) => {
                log::info!("welcome as {id}");
                self.own_id = Some(id);
                true
            }
            Ok(ServerMsg::Roster { entries }) => self.apply_roster(&entries),
            Ok(ServerMsg::Moved { id, pos }) => self.apply_move(&id, Vec3::from(pos)),
            Err(e) => {
                metrics::counter!("replication.dropped").increment(1);
                log::warn!("dropping undecodable server msg: {e:#}");
                false
            }
        }
    }

    fn apply_roster(&mut self, entries: &[RosterEntry]) -> bool {
        let mut changed = false;
        // Despawn proxies absent from the snapshot, and any proxy a late
        // Welcome revealed to be ourselves.
        let mut gone = Vec::new();
        self.proxies.retain(|p| {
            let keep = entries.iter().any(|e| e.id == p.id)
                && Some(p.id.as_str()) != self.own_id.as_deref();
            if !keep {
                gone.push(p.id.clone());
            }
            keep
        });
        for id in gone {
            log::debug!("remote {id} left");
            self.events.despawned.push(id);
            changed = true;
        }
        for e in entries {
            if Some(e.id.as_str()) == self.own_id.as_deref() {
                continue;
            }
            let pos = Vec3::from(e.pos);
            if let Some(p) = self.proxies.iter_mut().find(|p| p.id == e.id) {
                // Known proxy: the snapshot only retargets it.
                if p.target != pos {
                    p.target = pos;
                    changed = true;
                }
            } else {
                log::debug!("remote {} joined at {pos:?}", e.id);
                self.proxies.push(RemoteProxy {
                    id: e.id.clone(),
                    current: pos,
                    target: pos,
                });
                self.events.spawned.push(e.id.clone());
                changed = true;
            }
        }
        changed
    }

    fn apply_move(&mut self, id: &str, pos: Vec3) -> bool {
        if Some(id) == self.own_id.as_deref() {
            return false;
        }
        if let Some(p) = self.proxies.iter_mut().find(|p| p.id == id) {
            p.target = pos;
            true
        } else {
            // Possible after a roster removed the id mid-flight.
            log::debug!("move for untracked id {id}; ignored");
            false
        }
    }

    /// One tick of exponential smoothing toward each proxy's target.
    pub fn step(&mut self) {
        for p in &mut self.proxies {
            p.current += (p.target - p.current) * SMOOTHING;
        }
    }

    /// Presence changes since the last call.
    pub fn take_events(&mut self) -> RosterEvents {
        std::mem::take(&mut self.events)
    }
}
