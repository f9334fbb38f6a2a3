//! Per-tick systems over the actor store. Free functions, no runtime: the
//! session calls them in a fixed order each frame.

pub mod enemy;
pub mod movement;
pub mod pose;
