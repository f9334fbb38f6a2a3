//! Pause-aware simulation clock.
//!
//! `elapsed` advances only while unpaused, and every timer in the sim is an
//! absolute deadline in this domain. Pausing therefore freezes all pending
//! locks and windows without per-timer bookkeeping.

use std::time::Instant;

/// Longest dt a single frame may contribute. A stall (debugger, window drag)
/// must not teleport the simulation.
pub const MAX_FRAME_DT: f32 = 0.1;

/// One tick's worth of time: the step taken and the total unpaused elapsed.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub dt: f32,
    pub elapsed: f64,
}

#[derive(Debug, Default)]
pub struct GameClock {
    last: Option<Instant>,
    elapsed: f64,
    paused: bool,
}

impl GameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure dt since the previous call and advance `elapsed` unless paused.
    pub fn tick(&mut self) -> Frame {
        let now = Instant::now();
        let dt = match self.last {
            Some(prev) => now
                .duration_since(prev)
                .as_secs_f32()
                .clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last = Some(now);
        if self.paused {
            return Frame {
                dt: 0.0,
                elapsed: self.elapsed,
            };
        }
        self.elapsed += f64::from(dt);
        Frame {
            dt,
            elapsed: self.elapsed,
        }
    }

    /// Deterministic step for tests and fixed-rate drivers.
    pub fn advance(&mut self, dt: f32) -> Frame {
        if self.paused {
            return Frame {
                dt: 0.0,
                elapsed: self.elapsed,
            };
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.elapsed += f64::from(dt);
        Frame {
            dt,
            elapsed: self.elapsed,
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        // Forget the last sample on unpause so a host that stopped ticking
        // does not bill the whole pause span to the first live frame.
        if self.paused && !paused {
            self.last = None;
        }
        self.paused = paused;
    }

    #[must_use]
    pub fn paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
