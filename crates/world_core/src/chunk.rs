//! Chunk keys and deterministic chunk content.

use data_runtime::configs::world_gen::WorldGenCfg;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Grid coordinates of a chunk: `round(world / chunk_size)` per axis, so the
/// observer's own chunk is the one whose center is nearest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkKey {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkKey {
    #[must_use]
    pub fn containing(pos: Vec3, chunk_size: f32) -> Self {
        Self {
            cx: (pos.x / chunk_size).round() as i32,
            cz: (pos.z / chunk_size).round() as i32,
        }
    }

    /// World-space center of this chunk; content offsets are relative to it.
    #[must_use]
    pub fn origin(self, chunk_size: f32) -> Vec3 {
        Vec3::new(self.cx as f32 * chunk_size, 0.0, self.cz as f32 * chunk_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenTier {
    Bronze,
    Silver,
    Gold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tree {
    pub offset: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// Unique within its chunk.
    pub id: u32,
    pub tier: TokenTier,
    pub offset: Vec3,
}

/// Generation parameters, folded once from config.
#[derive(Debug, Clone, Copy)]
pub struct GenTuning {
    pub chunk_size: f32,
    /// Chunks kept resident on each side of the observer's chunk.
    pub half_extent: i32,
    pub trees: (u32, u32),
    pub tokens: (u32, u32),
    pub silver_weight: f64,
    pub bronze_weight: f64,
}

impl Default for GenTuning {
    fn default() -> Self {
        Self {
            chunk_size: 20.0,
            half_extent: 2,
            trees: (3, 5),
            tokens: (2, 4),
            silver_weight: 0.6,
            bronze_weight: 0.3,
        }
    }
}

impl GenTuning {
    #[must_use]
    pub fn from_config(cfg: &WorldGenCfg) -> Self {
        Self {
            chunk_size: cfg.chunk_size(),
            half_extent: i32::try_from((cfg.visible_chunks() - 1) / 2).unwrap_or(2),
            trees: (cfg.trees_min(), cfg.trees_max()),
            tokens: (cfg.tokens_min(), cfg.tokens_max()),
            silver_weight: cfg.silver_weight(),
            bronze_weight: cfg.bronze_weight(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkContent {
    pub trees: Vec<Tree>,
    pub tokens: Vec<Token>,
}

/// Fold the chunk key into the grid seed. Any fixed odd multipliers do; the
/// point is that neighboring keys land far apart in seed space.
fn chunk_seed(seed: u64, key: ChunkKey) -> u64 {
    let x = i64::from(key.cx) as u64;
    let z = i64::from(key.cz) as u64;
    seed ^ x.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ z.wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
}

impl ChunkContent {
    /// Deterministic content for one chunk: same seed and key, same chunk.
    #[must_use]
    pub fn generate(seed: u64, key: ChunkKey, t: &GenTuning) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(chunk_seed(seed, key));
        let half = t.chunk_size / 2.0;
        let n_trees = rng.gen_range(t.trees.0..=t.trees.1);
        let trees = (0..n_trees)
            .map(|_| Tree {
                offset: Vec3::new(rng.gen_range(-half..half), 0.0, rng.gen_range(-half..half)),
            })
            .collect();
        let n_tokens = rng.gen_range(t.tokens.0..=t.tokens.1);
        let tokens = (0..n_tokens)
            .map(|id| {
                let roll: f64 = rng.gen_range(0.0..1.0);
                let tier = if roll < t.silver_weight {
                    TokenTier::Silver
                } else if roll < t.silver_weight + t.bronze_weight {
                    TokenTier::Bronze
                } else {
                    TokenTier::Gold
                };
                Token {
                    id,
                    tier,
                    offset: Vec3::new(rng.gen_range(-half..half), 0.5, rng.gen_range(-half..half)),
                }
            })
            .collect();
        Self { trees, tokens }
    }
}
