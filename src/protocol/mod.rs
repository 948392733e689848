//! Orchestra Wire Protocol
//!
//! Shared definitions between musicians (announcers) and the auditor (collector).
//!
//! ## Transport
//! - **Announcements**: one JSON datagram per tick, sent to a multicast group on a well-known port.
//! - **Queries**: a TCP connection to the auditor; connecting is the request, the server writes
//!   the active roster as a JSON array and closes the connection.
//!
//! All deployments of one orchestra must agree on the constants below.

pub mod instrument;
pub mod types;

#[cfg(test)]
mod tests;

use std::net::Ipv4Addr;
use std::time::Duration;

/// Port shared by the announcement channel (UDP) and the query channel (TCP).
pub const PROTOCOL_PORT: u16 = 2205;

pub const MULTICAST_GROUP: Ipv4Addr = Ipv4Addr::new(239, 255, 22, 5);

/// A musician silent for longer than this is evicted on the next query.
pub const ACTIVE_WINDOW: Duration = Duration::from_secs(5);

pub const ANNOUNCE_PERIOD: Duration = Duration::from_secs(1);

/// Keep announcements on the local link unless configured otherwise.
pub const MULTICAST_TTL: u32 = 1;

/// Upper bound for a single announcement datagram.
pub const MAX_DATAGRAM_SIZE: usize = 65536;
