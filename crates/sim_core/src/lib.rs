//! sim_core: deterministic game rules.
//!
//! Scope
//! - Pause-aware clock; every timer in the sim is a deadline in its domain
//! - Actor store (player and enemy)
//! - Action state machine (light/heavy attacks, dodge, defend)
//! - Combat resolution, enemy AI, locomotion, pose sampling
//!
//! No I/O and no platform dependencies; callers drive everything with frames.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

pub mod actions;
pub mod actor;
pub mod clock;
pub mod combat;
pub mod systems;
