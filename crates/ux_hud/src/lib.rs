//! ux_hud: HUD state and the lightweight draw data derived from it.
//!
//! Owns runtime HUD switches plus the per-frame numbers the overlay shows
//! (health bars, wallet, inventory, banners). Deliberately dependency-free;
//! the platform layer feeds it plain values and renders whatever it returns.

/// Enemy health bars only show inside this range (world units).
pub const ENEMY_BAR_RANGE: f32 = 25.0;

/// One inventory row for the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLine {
    pub name: String,
    pub equipped: bool,
}

#[derive(Debug, Clone)]
pub struct HudModel {
    hud_enabled: bool,
    perf_enabled: bool,
    inventory_open: bool,
    player_hp: f32,
    enemy_hp: f32,
    enemy_distance: f32,
    wallet: (u64, u64, u64),
    items: Vec<InventoryLine>,
    game_over: bool,
    paused: bool,
    connected: bool,
}

impl Default for HudModel {
    fn default() -> Self {
        Self {
            hud_enabled: true,
            perf_enabled: false,
            inventory_open: false,
            player_hp: 1.0,
            enemy_hp: 1.0,
            enemy_distance: f32::INFINITY,
            wallet: (0, 0, 0),
            items: Vec::new(),
            game_over: false,
            paused: false,
            connected: false,
        }
    }
}

impl HudModel {
    pub fn toggle_hud(&mut self) {
        self.hud_enabled = !self.hud_enabled;
    }
    pub fn toggle_perf(&mut self) {
        self.perf_enabled = !self.perf_enabled;
    }
    pub fn toggle_inventory(&mut self) {
        self.inventory_open = !self.inventory_open;
    }

    #[must_use]
    pub fn hud_enabled(&self) -> bool {
        self.hud_enabled
    }
    #[must_use]
    pub fn perf_enabled(&self) -> bool {
        self.perf_enabled
    }
    #[must_use]
    pub fn inventory_open(&self) -> bool {
        self.inventory_open
    }

    // Per-frame feeds from the session.

    pub fn set_player_hp(&mut self, fraction: f32) {
        self.player_hp = fraction.clamp(0.0, 1.0);
    }
    pub fn set_enemy(&mut self, fraction: f32, distance: f32) {
        self.enemy_hp = fraction.clamp(0.0, 1.0);
        self.enemy_distance = distance;
    }
    pub fn set_wallet(&mut self, bronze: u64, silver: u64, gold: u64) {
        self.wallet = (bronze, silver, gold);
    }
    pub fn set_inventory(&mut self, items: Vec<InventoryLine>) {
        self.items = items;
    }
    pub fn set_game_over(&mut self, on: bool) {
        self.game_over = on;
    }
    pub fn set_paused(&mut self, on: bool) {
        self.paused = on;
    }
    pub fn set_connected(&mut self, on: bool) {
        self.connected = on;
    }

    // Derived draw data.

    #[must_use]
    pub fn player_bar(&self) -> f32 {
        self.player_hp
    }

    /// Enemy bar fraction, or `None` while it should stay hidden.
    #[must_use]
    pub fn enemy_bar(&self) -> Option<f32> {
        if self.hud_enabled && self.enemy_distance < ENEMY_BAR_RANGE {
            Some(self.enemy_hp)
        } else {
            None
        }
    }

    /// `"0g 1s 42b"` for the corner readout.
    #[must_use]
    pub fn wallet_line(&self) -> String {
        let (b, s, g) = self.wallet;
        format!("{g}g {s}s {b}b")
    }

    #[must_use]
    pub fn inventory_lines(&self) -> &[InventoryLine] {
        &self.items
    }

    /// Center-screen banner, if any. Death outranks pause.
    #[must_use]
    pub fn banner(&self) -> Option<&'static str> {
        if self.game_over {
            Some("You fell. Press Enter to restart.")
        } else if self.paused {
            Some("Paused")
        } else {
            None
        }
    }

    /// Corner connectivity marker shown while multiplayer is down.
    #[must_use]
    pub fn offline_marker(&self) -> Option<&'static str> {
        if self.connected {
            None
        } else {
            Some("offline")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ENEMY_BAR_RANGE, HudModel, InventoryLine};

    #[test]
    fn toggles_default_and_flip() {
        let mut m = HudModel::default();
        assert!(m.hud_enabled());
        assert!(!m.perf_enabled());
        assert!(!m.inventory_open());
        m.toggle_perf();
        assert!(m.perf_enabled());
        m.toggle_hud();
        assert!(!m.hud_enabled());
        m.toggle_inventory();
        assert!(m.inventory_open());
    }

    #[test]
    fn enemy_bar_shows_only_in_range() {
        let mut m = HudModel::default();
        m.set_enemy(0.5, ENEMY_BAR_RANGE + 1.0);
        assert_eq!(m.enemy_bar(), None);
        m.set_enemy(0.5, 10.0);
        assert_eq!(m.enemy_bar(), Some(0.5));
        m.toggle_hud();
        assert_eq!(m.enemy_bar(), None, "hud off hides everything");
    }

    #[test]
    fn banner_priority_death_over_pause() {
        let mut m = HudModel::default();
        assert_eq!(m.banner(), None);
        m.set_paused(true);
        assert_eq!(m.banner(), Some("Paused"));
        m.set_game_over(true);
        assert!(m.banner().unwrap().contains("restart"));
    }

    #[test]
    fn wallet_line_orders_gold_first() {
        let mut m = HudModel::default();
        m.set_wallet(42, 1, 0);
        assert_eq!(m.wallet_line(), "0g 1s 42b");
    }

    #[test]
    fn hp_feeds_are_clamped() {
        let mut m = HudModel::default();
        m.set_player_hp(1.7);
        assert!((m.player_bar() - 1.0).abs() < f32::EPSILON);
        m.set_player_hp(-0.2);
        assert!((m.player_bar() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn inventory_lines_pass_through() {
        let mut m = HudModel::default();
        m.set_inventory(vec![InventoryLine {
            name: "Iron Sword".into(),
            equipped: true,
        }]);
        assert_eq!(m.inventory_lines().len(), 1);
        assert!(m.inventory_lines()[0].equipped);
    }
}
