//! Presentation seam between the session and whatever draws it.
//!
//! The renderer or HUD implements this trait to consume per-frame visual
//! state. Kept here so the session never links against a windowing or GPU
//! stack. Every method has a no-op default; hosts implement only what they
//! draw.

use glam::Vec3;
use sim_core::actor::{ActorId, ActorKind, Transform};
use sim_core::systems::pose::Pose;
use world_core::chunk::{ChunkContent, ChunkKey, Token};
use world_core::wallet::Wallet;

pub trait Presenter {
    /// Position, orientation and limb angles for one local actor this frame.
    fn entity_pose(&mut self, _id: ActorId, _kind: ActorKind, _tr: &Transform, _pose: &Pose) {}
    fn entity_visible(&mut self, _id: ActorId, _visible: bool) {}
    /// Health as `0..=1` of maximum.
    fn health_fraction(&mut self, _id: ActorId, _fraction: f32) {}

    fn remote_spawned(&mut self, _id: &str, _pos: Vec3) {}
    fn remote_despawned(&mut self, _id: &str) {}
    /// Smoothed proxy position for one remote entity this frame. `moving` is
    /// true while the proxy is still closing on its target, for walk cycles.
    fn remote_pose(&mut self, _id: &str, _pos: Vec3, _moving: bool) {}

    fn chunk_spawned(&mut self, _key: ChunkKey, _content: &ChunkContent) {}
    /// The chunk left the window; release anything held for it.
    fn chunk_evicted(&mut self, _key: ChunkKey) {}
    fn token_collected(&mut self, _key: ChunkKey, _token: &Token) {}

    fn wallet_changed(&mut self, _wallet: &Wallet) {}
    fn inventory_changed(&mut self, _items: &[data_runtime::ids::ItemId]) {}
    fn equipped_changed(&mut self, _item: Option<&data_runtime::ids::ItemId>) {}

    fn game_over(&mut self) {}
    fn restarted(&mut self) {}
    fn paused(&mut self, _paused: bool) {}
}

/// Presenter that draws nothing. Headless hosts and tests that only assert
/// on session state use this.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}
