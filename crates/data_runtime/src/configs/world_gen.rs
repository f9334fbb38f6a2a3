//! World generation tuning loaded from `data/config/world_gen.toml` with env
//! overrides.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WorldGenCfg {
    /// Side length of a square chunk in world units.
    pub chunk_size: Option<f32>,
    /// Edge of the resident window in chunks; odd so the observer sits in the
    /// center cell.
    pub visible_chunks: Option<u32>,
    pub trees_min: Option<u32>,
    pub trees_max: Option<u32>,
    pub tokens_min: Option<u32>,
    pub tokens_max: Option<u32>,
    /// Tier roll: `< silver_weight` silver, `< silver_weight + bronze_weight`
    /// bronze, else gold.
    pub silver_weight: Option<f64>,
    pub bronze_weight: Option<f64>,
    /// Fixed generation seed; absent means seed from entropy at startup.
    pub seed: Option<u64>,
}

impl Default for WorldGenCfg {
    fn default() -> Self {
        Self {
            chunk_size: Some(20.0),
            visible_chunks: Some(5),
            trees_min: Some(3),
            trees_max: Some(5),
            tokens_min: Some(2),
            tokens_max: Some(4),
            silver_weight: Some(0.6),
            bronze_weight: Some(0.3),
            seed: None,
        }
    }
}

impl WorldGenCfg {
    #[must_use]
    pub fn chunk_size(&self) -> f32 {
        self.chunk_size.unwrap_or(20.0)
    }
    #[must_use]
    pub fn visible_chunks(&self) -> u32 {
        self.visible_chunks.unwrap_or(5).max(1)
    }
    #[must_use]
    pub fn trees_min(&self) -> u32 {
        self.trees_min.unwrap_or(3)
    }
    #[must_use]
    pub fn trees_max(&self) -> u32 {
        self.trees_max.unwrap_or(5).max(self.trees_min())
    }
    #[must_use]
    pub fn tokens_min(&self) -> u32 {
        self.tokens_min.unwrap_or(2)
    }
    #[must_use]
    pub fn tokens_max(&self) -> u32 {
        self.tokens_max.unwrap_or(4).max(self.tokens_min())
    }
    #[must_use]
    pub fn silver_weight(&self) -> f64 {
        self.silver_weight.unwrap_or(0.6)
    }
    #[must_use]
    pub fn bronze_weight(&self) -> f64 {
        self.bronze_weight.unwrap_or(0.3)
    }
}

pub fn load_default() -> Result<WorldGenCfg> {
    let path = crate::loader::data_root().join("config/world_gen.toml");
    let mut cfg = if path.is_file() {
        let txt = std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<WorldGenCfg>(&txt).context("parse world_gen TOML")?
    } else {
        WorldGenCfg::default()
    };
    // Env overrides
    if let Some(seed) = std::env::var("GREENWOLD_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        cfg.seed = Some(seed);
    }
    Ok(cfg)
}
