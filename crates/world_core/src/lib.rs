//! world_core: unbounded plane streamed as square chunks.
//!
//! A square window of chunks stays resident around the observer; content
//! (trees, collectible tokens) is a pure function of the grid seed and the
//! chunk key, so eviction is free and re-entry regenerates byte-identical
//! chunks. Collected tokens are credited to a tiered wallet; the wallet,
//! not the world, is the persistent record.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod bounds;
pub mod chunk;
pub mod grid;
pub mod wallet;

pub use bounds::Aabb;
pub use chunk::{ChunkContent, ChunkKey, GenTuning, Token, TokenTier, Tree};
pub use grid::{StreamEvents, WorldGrid};
pub use wallet::Wallet;
