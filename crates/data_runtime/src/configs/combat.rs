//! Combat tuning loaded from `data/config/combat.toml`.
//!
//! Every field is optional in the file; accessors fold in the defaults so
//! callers never see an `Option`.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CombatCfg {
    pub light_lock_s: Option<f32>,
    pub light_pose_s: Option<f32>,
    pub light_damage: Option<i32>,
    pub heavy_lock_s: Option<f32>,
    pub heavy_pose_s: Option<f32>,
    pub heavy_damage: Option<i32>,
    pub heavy_hold_s: Option<f32>,
    pub dodge_lock_s: Option<f32>,
    pub dodge_iframes_s: Option<f32>,
    pub melee_range: Option<f32>,
    pub player_max_hp: Option<i32>,
    pub enemy_speed: Option<f32>,
    pub enemy_engage_range: Option<f32>,
    pub enemy_damage: Option<i32>,
    pub enemy_cooldown_s: Option<f32>,
    pub enemy_respawn_radius: Option<f32>,
}

impl Default for CombatCfg {
    fn default() -> Self {
        Self {
            light_lock_s: Some(0.5),
            light_pose_s: Some(0.2),
            light_damage: Some(8),
            heavy_lock_s: Some(0.8),
            heavy_pose_s: Some(0.3),
            heavy_damage: Some(25),
            heavy_hold_s: Some(1.0),
            dodge_lock_s: Some(0.6),
            dodge_iframes_s: Some(0.5),
            melee_range: Some(2.5),
            player_max_hp: Some(100),
            enemy_speed: Some(2.5),
            enemy_engage_range: Some(2.0),
            enemy_damage: Some(8),
            enemy_cooldown_s: Some(1.5),
            enemy_respawn_radius: Some(20.0),
        }
    }
}

impl CombatCfg {
    #[must_use]
    pub fn light_lock_s(&self) -> f32 {
        self.light_lock_s.unwrap_or(0.5)
    }
    #[must_use]
    pub fn light_pose_s(&self) -> f32 {
        self.light_pose_s.unwrap_or(0.2)
    }
    #[must_use]
    pub fn light_damage(&self) -> i32 {
        self.light_damage.unwrap_or(8)
    }
    #[must_use]
    pub fn heavy_lock_s(&self) -> f32 {
        self.heavy_lock_s.unwrap_or(0.8)
    }
    #[must_use]
    pub fn heavy_pose_s(&self) -> f32 {
        self.heavy_pose_s.unwrap_or(0.3)
    }
    #[must_use]
    pub fn heavy_damage(&self) -> i32 {
        self.heavy_damage.unwrap_or(25)
    }
    #[must_use]
    pub fn heavy_hold_s(&self) -> f32 {
        self.heavy_hold_s.unwrap_or(1.0)
    }
    #[must_use]
    pub fn dodge_lock_s(&self) -> f32 {
        self.dodge_lock_s.unwrap_or(0.6)
    }
    #[must_use]
    pub fn dodge_iframes_s(&self) -> f32 {
        self.dodge_iframes_s.unwrap_or(0.5)
    }
    #[must_use]
    pub fn melee_range(&self) -> f32 {
        self.melee_range.unwrap_or(2.5)
    }
    #[must_use]
    pub fn player_max_hp(&self) -> i32 {
        self.player_max_hp.unwrap_or(100)
    }
    #[must_use]
    pub fn enemy_speed(&self) -> f32 {
        self.enemy_speed.unwrap_or(2.5)
    }
    #[must_use]
    pub fn enemy_engage_range(&self) -> f32 {
        self.enemy_engage_range.unwrap_or(2.0)
    }
    #[must_use]
    pub fn enemy_damage(&self) -> i32 {
        self.enemy_damage.unwrap_or(8)
    }
    #[must_use]
    pub fn enemy_cooldown_s(&self) -> f32 {
        self.enemy_cooldown_s.unwrap_or(1.5)
    }
    #[must_use]
    pub fn enemy_respawn_radius(&self) -> f32 {
        self.enemy_respawn_radius.unwrap_or(20.0)
    }
}

pub fn load_default() -> Result<CombatCfg> {
    let path = crate::loader::data_root().join("config/combat.toml");
    let cfg = if path.is_file() {
        let txt = std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<CombatCfg>(&txt).context("parse combat TOML")?
    } else {
        CombatCfg::default()
    };
    Ok(cfg)
}
