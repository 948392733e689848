//! Runtime Configuration
//!
//! Every knob defaults to the protocol constants so that independently started
//! musicians and auditors interoperate. The binaries expose the same fields as
//! CLI flags with `ORCHESTRA_*` environment fallbacks.

use crate::protocol::{
    ACTIVE_WINDOW, ANNOUNCE_PERIOD, MULTICAST_GROUP, MULTICAST_TTL, PROTOCOL_PORT,
};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AuditorConfig {
    /// Where the ingest socket listens for announcements.
    pub udp_bind: SocketAddr,
    /// Where query clients connect. Local-only by default.
    pub tcp_bind: SocketAddr,
    /// Group to join on the ingest socket; `None` listens for unicast only.
    pub multicast_group: Option<Ipv4Addr>,
    pub active_window: Duration,
}

impl Default for AuditorConfig {
    fn default() -> Self {
        Self {
            udp_bind: SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, PROTOCOL_PORT).into(),
            tcp_bind: SocketAddrV4::new(Ipv4Addr::LOCALHOST, PROTOCOL_PORT).into(),
            multicast_group: Some(MULTICAST_GROUP),
            active_window: ACTIVE_WINDOW,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MusicianConfig {
    /// Destination of every announcement, normally the multicast group.
    pub target: SocketAddr,
    pub period: Duration,
    pub multicast_ttl: u32,
}

impl Default for MusicianConfig {
    fn default() -> Self {
        Self {
            target: SocketAddrV4::new(MULTICAST_GROUP, PROTOCOL_PORT).into(),
            period: ANNOUNCE_PERIOD,
            multicast_ttl: MULTICAST_TTL,
        }
    }
}
