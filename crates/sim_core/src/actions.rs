//! Action state machine: light/heavy attacks, dodge, defend.
//!
//! Every window is an absolute deadline against the clock's unpaused elapsed
//! time. A lock can only expire; `try_start` while locked is a silent no-op
//! because the caller is raw per-frame input and dropped presses are the
//! contract, not an error. Defend is a level, not an edge, and is inert
//! while any lock is live.

use data_runtime::configs::combat::CombatCfg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Light,
    Heavy,
    Dodge,
}

/// Durations (seconds) and damages (hit points) for the FSM and resolver.
#[derive(Debug, Clone, Copy)]
pub struct ActionTuning {
    pub light_lock_s: f32,
    pub light_pose_s: f32,
    pub light_damage: i32,
    pub heavy_lock_s: f32,
    pub heavy_pose_s: f32,
    pub heavy_damage: i32,
    /// Minimum hold before a release counts as a heavy attack.
    pub heavy_hold_s: f32,
    pub dodge_lock_s: f32,
    /// Immunity window; deliberately shorter than the dodge lock, leaving a
    /// vulnerable tail while still committed.
    pub dodge_iframes_s: f32,
    /// How long the dodge crouch reads on the skeleton.
    pub dodge_dip_s: f32,
    pub melee_range: f32,
}

impl Default for ActionTuning {
    fn default() -> Self {
        Self {
            light_lock_s: 0.5,
            light_pose_s: 0.2,
            light_damage: 8,
            heavy_lock_s: 0.8,
            heavy_pose_s: 0.3,
            heavy_damage: 25,
            heavy_hold_s: 1.0,
            dodge_lock_s: 0.6,
            dodge_iframes_s: 0.5,
            dodge_dip_s: 0.2,
            melee_range: 2.5,
        }
    }
}

impl ActionTuning {
    #[must_use]
    pub fn from_config(cfg: &CombatCfg) -> Self {
        Self {
            light_lock_s: cfg.light_lock_s(),
            light_pose_s: cfg.light_pose_s(),
            light_damage: cfg.light_damage(),
            heavy_lock_s: cfg.heavy_lock_s(),
            heavy_pose_s: cfg.heavy_pose_s(),
            heavy_damage: cfg.heavy_damage(),
            heavy_hold_s: cfg.heavy_hold_s(),
            dodge_lock_s: cfg.dodge_lock_s(),
            dodge_iframes_s: cfg.dodge_iframes_s(),
            dodge_dip_s: 0.2,
            melee_range: cfg.melee_range(),
        }
    }

    #[must_use]
    pub fn damage(&self, kind: ActionKind) -> i32 {
        match kind {
            ActionKind::Light => self.light_damage,
            ActionKind::Heavy => self.heavy_damage,
            ActionKind::Dodge => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ActionFsm {
    lock_until: f64,
    pose_until: f64,
    dodge_until: f64,
    charge_started: Option<f64>,
    current: Option<ActionKind>,
    defending: bool,
}

impl ActionFsm {
    #[inline]
    #[must_use]
    pub fn locked(&self, now: f64) -> bool {
        now < self.lock_until
    }

    /// The action owning the live lock, if any.
    #[must_use]
    pub fn current(&self, now: f64) -> Option<ActionKind> {
        if self.locked(now) { self.current } else { None }
    }

    /// Start an action unless a lock is live. Returns whether it started.
    /// Starting anything cancels an in-progress charge.
    pub fn try_start(&mut self, kind: ActionKind, now: f64, t: &ActionTuning) -> bool {
        if self.locked(now) {
            log::trace!("action {kind:?} dropped: locked for {:.3}s", self.lock_until - now);
            return false;
        }
        self.charge_started = None;
        self.current = Some(kind);
        match kind {
            ActionKind::Light => {
                self.lock_until = now + f64::from(t.light_lock_s);
                self.pose_until = now + f64::from(t.light_pose_s);
            }
            ActionKind::Heavy => {
                self.lock_until = now + f64::from(t.heavy_lock_s);
                self.pose_until = now + f64::from(t.heavy_pose_s);
            }
            ActionKind::Dodge => {
                self.lock_until = now + f64::from(t.dodge_lock_s);
                self.pose_until = now + f64::from(t.dodge_dip_s);
                self.dodge_until = now + f64::from(t.dodge_iframes_s);
            }
        }
        true
    }

    /// Begin holding a heavy charge. No-op while locked or already charging.
    pub fn begin_charge(&mut self, now: f64) {
        if !self.locked(now) && self.charge_started.is_none() {
            self.charge_started = Some(now);
        }
    }

    #[must_use]
    pub fn charging(&self) -> bool {
        self.charge_started.is_some()
    }

    /// Release the held charge. A hold at or past the threshold attempts a
    /// heavy attack; anything shorter is discarded outright.
    pub fn release_charge(&mut self, now: f64, t: &ActionTuning) -> Option<ActionKind> {
        let started = self.charge_started.take()?;
        if now - started >= f64::from(t.heavy_hold_s) && self.try_start(ActionKind::Heavy, now, t) {
            return Some(ActionKind::Heavy);
        }
        None
    }

    pub fn set_defending(&mut self, on: bool) {
        self.defending = on;
    }

    /// Defense counts only while the level is held and no lock is live.
    #[must_use]
    pub fn defense_active(&self, now: f64) -> bool {
        self.defending && !self.locked(now)
    }

    #[inline]
    #[must_use]
    pub fn dodging(&self, now: f64) -> bool {
        now < self.dodge_until
    }

    /// The action whose pose window is still live, if any.
    #[must_use]
    pub fn pose(&self, now: f64) -> Option<ActionKind> {
        if now < self.pose_until { self.current } else { None }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
