//! client_core: the session layer between the platform host and the sim.
//!
//! Owns the per-tick orchestration: sample input, advance the clock, run
//! actions and combat, stream the world, reconcile remote proxies, then hand
//! the frame's visual state to a [`presenter::Presenter`]. No windowing and
//! no rendering; the host drives `GameSession::tick` from its frame callback.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools
)]

pub mod input;
pub mod presenter;
pub mod replication;
pub mod session;
pub mod telemetry;
