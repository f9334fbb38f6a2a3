//! Resident chunk window: idempotent fill, hysteresis eviction, pickups.

use crate::bounds::Aabb;
use crate::chunk::{ChunkContent, ChunkKey, GenTuning, Token};
use glam::Vec3;
use std::collections::HashMap;

/// What one `refresh` changed, for the presenter.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StreamEvents {
    pub spawned: Vec<ChunkKey>,
    pub evicted: Vec<ChunkKey>,
}

impl StreamEvents {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty() && self.evicted.is_empty()
    }
}

pub struct WorldGrid {
    seed: u64,
    t: GenTuning,
    resident: HashMap<ChunkKey, ChunkContent>,
}

impl WorldGrid {
    #[must_use]
    pub fn new(seed: u64, t: GenTuning) -> Self {
        Self {
            seed,
            t,
            resident: HashMap::new(),
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn tuning(&self) -> &GenTuning {
        &self.t
    }

    #[must_use]
    pub fn get(&self, key: ChunkKey) -> Option<&ChunkContent> {
        self.resident.get(&key)
    }

    #[must_use]
    pub fn resident_count(&self) -> usize {
        self.resident.len()
    }

    #[must_use]
    pub fn resident_tokens(&self) -> usize {
        self.resident.values().map(|c| c.tokens.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChunkKey, &ChunkContent)> {
        self.resident.iter().map(|(k, v)| (*k, v))
    }

    /// Keep the window around `observer` resident and drop chunks that fell
    /// out of the hysteresis ring (one chunk beyond the window, so edge
    /// oscillation never thrashes spawn/evict pairs).
    pub fn refresh(&mut self, observer: Vec3) -> StreamEvents {
        let center = ChunkKey::containing(observer, self.t.chunk_size);
        let half = self.t.half_extent;
        let mut events = StreamEvents::default();
        for dx in -half..=half {
            for dz in -half..=half {
                let key = ChunkKey {
                    cx: center.cx + dx,
                    cz: center.cz + dz,
                };
                self.resident.entry(key).or_insert_with(|| {
                    events.spawned.push(key);
                    ChunkContent::generate(self.seed, key, &self.t)
                });
            }
        }
        let keep = half + 1;
        self.resident.retain(|key, _| {
            let inside = (key.cx - center.cx).abs() <= keep && (key.cz - center.cz).abs() <= keep;
            if !inside {
                events.evicted.push(*key);
            }
            inside
        });
        if !events.is_empty() {
            metrics::counter!("world.chunks_spawned").increment(events.spawned.len() as u64);
            metrics::counter!("world.chunks_evicted").increment(events.evicted.len() as u64);
            log::debug!(
                "stream refresh at {center:?}: +{} -{} ({} resident)",
                events.spawned.len(),
                events.evicted.len(),
                self.resident.len()
            );
        }
        events
    }

    /// Remove and return every token in the 3x3 neighborhood of the observer
    /// whose box overlaps the observer's box.
    pub fn collect(&mut self, observer: &Aabb) -> Vec<(ChunkKey, Token)> {
        let center = ChunkKey::containing(observer.center(), self.t.chunk_size);
        let mut picked = Vec::new();
        for dx in -1..=1 {
            for dz in -1..=1 {
                let key = ChunkKey {
                    cx: center.cx + dx,
                    cz: center.cz + dz,
                };
                let Some(content) = self.resident.get_mut(&key) else {
                    continue;
                };
                let origin = key.origin(self.t.chunk_size);
                content.tokens.retain(|tok| {
                    let world = origin + tok.offset;
                    let hit = observer.overlaps(&Aabb::from_center_half(world, Vec3::splat(0.5)));
                    if hit {
                        picked.push((key, *tok));
                    }
                    !hit
                });
            }
        }
        if !picked.is_empty() {
            metrics::counter!("world.tokens_collected").increment(picked.len() as u64);
        }
        picked
    }
}
