//! Actor store and the basic types every system shares.

use crate::actions::ActionFsm;
use data_runtime::ids::ItemId;
use glam::Vec3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActorId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActorKind {
    Player,
    Enemy,
}

#[derive(Copy, Clone, Debug)]
pub struct Health {
    pub hp: i32,
    pub max: i32,
}

impl Health {
    #[must_use]
    pub fn new(max: i32) -> Self {
        Self { hp: max, max }
    }
    #[inline]
    #[must_use]
    pub fn alive(&self) -> bool {
        self.hp > 0
    }
    /// Apply a signed delta, clamped to `[0, max]` on every path.
    #[inline]
    pub fn apply(&mut self, delta: i32) {
        self.hp = self.hp.saturating_add(delta).clamp(0, self.max);
    }
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.max <= 0 {
            0.0
        } else {
            self.hp as f32 / self.max as f32
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Transform {
    pub pos: Vec3,
    pub yaw: f32,
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub tr: Transform,
    pub hp: Health,
    pub visible: bool,
    pub vel_y: f32,
    pub airborne: bool,
    pub fsm: ActionFsm,
    /// Deadline before this actor's AI may attack again (enemy only).
    pub next_attack_at: f64,
    pub inventory: Vec<ItemId>,
    pub equipped: Option<ItemId>,
}

#[derive(Default, Debug)]
pub struct ActorStore {
    next_id: u32,
    pub actors: Vec<Actor>,
}

impl ActorStore {
    pub fn spawn(&mut self, kind: ActorKind, pos: Vec3, hp: Health) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.actors.push(Actor {
            id,
            kind,
            tr: Transform { pos, yaw: 0.0 },
            hp,
            visible: true,
            vel_y: 0.0,
            airborne: false,
            fsm: ActionFsm::default(),
            next_attack_at: 0.0,
            inventory: Vec::new(),
            equipped: None,
        });
        id
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }
    #[inline]
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.actors.iter_mut()
    }

    /// Remove one actor; returns false when the id is unknown.
    pub fn remove(&mut self, id: ActorId) -> bool {
        let before = self.actors.len();
        self.actors.retain(|a| a.id != id);
        self.actors.len() != before
    }

    #[must_use]
    pub fn first_of(&self, kind: ActorKind) -> Option<ActorId> {
        self.actors.iter().find(|a| a.kind == kind).map(|a| a.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
