//! Membership Module
//!
//! Tracks which musicians are currently playing.
//!
//! ## Core Mechanisms
//! - **Upsert on announcement**: every accepted announcement overwrites the entry for its identity
//!   and refreshes `last_seen`. The last datagram processed wins.
//! - **Lazy eviction**: nothing expires in the background. A query runs one snapshot+evict pass
//!   that returns active entries and drops expired ones under the same lock.
//! - **Injectable time**: the table takes `now` as an argument; callers get it from a [`clock::Clock`].

pub mod clock;
pub mod table;
pub mod types;
