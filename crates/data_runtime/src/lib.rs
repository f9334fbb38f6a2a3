//! data_runtime: data schemas and loaders.
//!
//! Item definitions and tuning configs live under the workspace `data/`
//! directory so the sim, client, and tools share one data API.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod ids;
pub mod item;
pub mod loader;
pub mod configs {
    pub mod combat;
    pub mod telemetry;
    pub mod world_gen;
}
