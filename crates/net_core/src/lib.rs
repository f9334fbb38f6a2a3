//! net_core: wire schema + in-proc replication plumbing.
//!
//! Scope
//! - Tagged little-endian message codecs: `snapshot` (server to client) and
//!   `command` (client to server)
//! - Versioned length framing so multiplexed streams can delimit messages
//! - Bounded in-proc channels and the transport trait + loopback pair

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate, clippy::cast_possible_truncation)]

pub mod channel;
pub mod command;
pub mod frame;
pub mod snapshot;
pub mod transport;
