// Root app shell and re-exports for workspace crates used by bins and tests.
pub use client_core as client;
pub use data_runtime as data;
pub use net_core as net;
pub use platform_winit;
pub use sim_core as sim;
pub use ux_hud as hud;
pub use world_core as world;
