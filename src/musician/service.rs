use anyhow::{Context, Result};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::config::MusicianConfig;
use crate::membership::types::MusicianId;
use crate::protocol::instrument::Instrument;
use crate::protocol::types::Announcement;

pub struct Musician {
    pub id: MusicianId,
    pub instrument: Instrument,
    target: SocketAddr,
    period: Duration,
    socket: Arc<UdpSocket>,
}

impl Musician {
    pub async fn new(instrument: Instrument, config: MusicianConfig) -> Result<Arc<Self>> {
        if config.period.is_zero() {
            anyhow::bail!("Announcement period must be greater than zero");
        }

        let bind_addr: SocketAddr = (Ipv4Addr::UNSPECIFIED, 0).into();
        let socket = UdpSocket::bind(bind_addr)
            .await
            .context("Failed to bind announcement socket")?;

        if config.target.ip().is_multicast() {
            socket.set_multicast_ttl_v4(config.multicast_ttl)?;
        }

        Ok(Arc::new(Self {
            id: MusicianId::new(),
            instrument,
            target: config.target,
            period: config.period,
            socket: Arc::new(socket),
        }))
    }

    pub fn announcement(&self) -> Announcement {
        Announcement::new(self.id.clone(), self.instrument)
    }

    /// Sends a single announcement.
    pub async fn announce_once(&self) -> Result<()> {
        let encoded = self.announcement().encode()?;
        self.socket.send_to(&encoded, self.target).await?;

        tracing::debug!(
            "Sent {} bytes to {} via {:?}",
            encoded.len(),
            self.target,
            self.socket.local_addr().ok()
        );

        Ok(())
    }

    /// Announces on every tick until the process ends. Send failures are logged
    /// and the schedule carries on.
    pub async fn play(self: Arc<Self>) {
        info!(
            "Musician {:?} playing {} ({}) every {:?} to {}",
            self.id,
            self.instrument,
            self.instrument.sound(),
            self.period,
            self.target
        );

        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            if let Err(e) = self.announce_once().await {
                tracing::warn!("Failed to send announcement to {}: {}", self.target, e);
            }
        }
    }
}
