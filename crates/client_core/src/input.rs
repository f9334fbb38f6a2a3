//! Input snapshot for one frame of local player intent.

use glam::Vec3;

/// Logical key state sampled once per tick.
///
/// Movement keys and `defend`/`heavy_held` are levels (true while held).
/// The `*_pressed` and `*_toggle` fields are one-shot edges: the host sets
/// them on key-press and clears them after handing the snapshot to the
/// session, so holding a key does not repeat the action.
#[derive(Default, Debug, Clone, Copy)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
    pub light_pressed: bool,
    /// Heavy attack charges while held; the session detects the release.
    pub heavy_held: bool,
    pub dodge_pressed: bool,
    /// Guard level: halves incoming damage while held.
    pub defend: bool,
    pub pause_toggle: bool,
    pub inventory_toggle: bool,
    pub equip_toggle: bool,
    pub restart_pressed: bool,
}

impl InputState {
    /// Planar movement intent. Forward is -Z; diagonal intent is normalized
    /// by the movement system, not here.
    #[must_use]
    pub fn move_dir(&self) -> Vec3 {
        let mut d = Vec3::ZERO;
        if self.forward {
            d.z -= 1.0;
        }
        if self.backward {
            d.z += 1.0;
        }
        if self.left {
            d.x -= 1.0;
        }
        if self.right {
            d.x += 1.0;
        }
        d
    }

    /// Drop the one-shot edges, keeping held levels. The host calls this
    /// after every tick.
    pub fn clear_edges(&mut self) {
        self.jump_pressed = false;
        self.light_pressed = false;
        self.dodge_pressed = false;
        self.pause_toggle = false;
        self.inventory_toggle = false;
        self.equip_toggle = false;
        self.restart_pressed = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
