use anyhow::{Context, Result};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tracing::info;

use crate::config::AuditorConfig;
use crate::membership::clock::Clock;
use crate::membership::table::MembershipTable;
use crate::protocol::MAX_DATAGRAM_SIZE;
use crate::protocol::types::{ActiveMusician, Announcement, encode_roster};

const ERROR_BACKOFF: Duration = Duration::from_millis(100);

pub struct AuditorService {
    pub table: Arc<MembershipTable>,
    clock: Arc<dyn Clock>,
    active_window: Duration,
    socket: Arc<UdpSocket>,
    listener: TcpListener,
}

impl AuditorService {
    /// Binds both well-known endpoints. Any failure here is fatal for the process.
    pub async fn bind(config: AuditorConfig, clock: Arc<dyn Clock>) -> Result<Arc<Self>> {
        let socket = UdpSocket::bind(config.udp_bind)
            .await
            .with_context(|| format!("Failed to bind announcement socket {}", config.udp_bind))?;

        if let Some(group) = config.multicast_group {
            socket
                .join_multicast_v4(group, Ipv4Addr::UNSPECIFIED)
                .with_context(|| format!("Failed to join multicast group {}", group))?;
            info!("[UDP] Joined multicast group {}", group);
        }

        let listener = TcpListener::bind(config.tcp_bind)
            .await
            .with_context(|| format!("Failed to bind query listener {}", config.tcp_bind))?;

        Ok(Arc::new(Self {
            table: Arc::new(MembershipTable::new()),
            clock,
            active_window: config.active_window,
            socket: Arc::new(socket),
            listener,
        }))
    }

    pub fn udp_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    pub fn tcp_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Spawns the ingest and query loops and returns immediately.
    pub fn start(self: Arc<Self>) {
        info!(
            "Starting auditor (active window {:?})...",
            self.active_window
        );

        let _ingest_handle = {
            let service = self.clone();
            tokio::spawn(async move {
                service.ingest_loop().await;
            })
        };

        let _query_handle = {
            let service = self.clone();
            tokio::spawn(async move {
                service.query_loop().await;
            })
        };

        info!("Ingest and query loops started");
    }

    async fn ingest_loop(self: Arc<Self>) {
        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];

        loop {
            match self.socket.recv_from(&mut buf).await {
                Ok((len, src)) => {
                    self.handle_datagram(&buf[..len], src);
                }
                Err(e) => {
                    tracing::error!("Failed to receive UDP datagram: {}", e);
                    tokio::time::sleep(ERROR_BACKOFF).await;
                }
            }
        }
    }

    /// Applies one datagram to the table. Returns whether it was accepted.
    ///
    /// Rejected datagrams never reach the table.
    pub fn handle_datagram(&self, buf: &[u8], src: SocketAddr) -> bool {
        match Announcement::decode(buf) {
            Ok(announcement) => {
                tracing::debug!(
                    "[UDP] {:?} plays {:?} ({}) from {}",
                    announcement.identity,
                    announcement.payload.sound,
                    announcement.payload.instrument,
                    src
                );

                self.table.upsert(
                    announcement.identity,
                    announcement.payload,
                    self.clock.now_ms(),
                );
                true
            }
            Err(e) => {
                tracing::warn!("Dropping datagram from {}: {}", src, e);
                false
            }
        }
    }

    async fn query_loop(self: Arc<Self>) {
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    let service = self.clone();
                    tokio::spawn(async move {
                        service.handle_connection(stream, peer).await;
                    });
                }
                Err(e) => {
                    tracing::error!("Failed to accept query connection: {}", e);
                    tokio::time::sleep(ERROR_BACKOFF).await;
                }
            }
        }
    }

    /// One snapshot+evict pass at the clock's current time.
    pub fn active_roster(&self) -> Vec<ActiveMusician> {
        self.table
            .snapshot_active(self.clock.now_ms(), self.active_window)
            .into_iter()
            .map(ActiveMusician::from)
            .collect()
    }

    async fn handle_connection(&self, mut stream: TcpStream, peer: SocketAddr) {
        tracing::debug!("[TCP] Query from {}", peer);

        let roster = self.active_roster();
        let body = match encode_roster(&roster) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to encode roster for {}: {}", peer, e);
                return;
            }
        };

        if let Err(e) = stream.write_all(&body).await {
            tracing::warn!("Client {} went away during response: {}", peer, e);
            return;
        }

        if let Err(e) = stream.shutdown().await {
            tracing::debug!("Failed to close connection to {}: {}", peer, e);
        }

        tracing::debug!("[TCP] Sent {} active musician(s) to {}", roster.len(), peer);
    }
}
