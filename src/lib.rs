//! Orchestra Presence Library
//!
//! Musicians announce themselves over UDP multicast; an auditor keeps a time-windowed
//! roster of who is currently playing and hands it out over TCP.
//!
//! ## Modules
//! - **`protocol`**: Well-known ports, the multicast group, timing constants, the instrument
//!   catalogue and the JSON wire types shared by both sides.
//! - **`membership`**: The roster itself. A concurrent table with upsert-on-announcement and a
//!   combined snapshot+evict query, plus the clock abstraction it is driven by.
//! - **`auditor`**: The collector service running the ingest loop and the query loop.
//! - **`musician`**: The announcer that broadcasts its identity on a fixed period.
//! - **`config`** / **`error`**: Runtime settings with protocol defaults, and the error types
//!   used at the network and startup boundaries.

pub mod auditor;
pub mod config;
pub mod error;
pub mod membership;
pub mod musician;
pub mod protocol;
