use anyhow::Result;
use clap::Parser;
use orchestra::auditor::service::AuditorService;
use orchestra::config::AuditorConfig;
use orchestra::membership::clock::SystemClock;
use orchestra::protocol::{MULTICAST_GROUP, PROTOCOL_PORT};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const STATS_INTERVAL: Duration = Duration::from_secs(5);

/// Listens to the orchestra and reports who is playing.
#[derive(Debug, Parser)]
#[command(name = "auditor", version)]
struct Args {
    /// Address the announcement socket binds to
    #[arg(long, env = "ORCHESTRA_UDP_BIND", default_value_t = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PROTOCOL_PORT)))]
    udp_bind: SocketAddr,

    /// Address query clients connect to
    #[arg(long, env = "ORCHESTRA_TCP_BIND", default_value_t = SocketAddr::from((Ipv4Addr::LOCALHOST, PROTOCOL_PORT)))]
    tcp_bind: SocketAddr,

    /// Multicast group to join
    #[arg(long, env = "ORCHESTRA_GROUP", default_value_t = MULTICAST_GROUP)]
    group: Ipv4Addr,

    /// Accept unicast announcements only; do not join the group
    #[arg(long, env = "ORCHESTRA_NO_MULTICAST")]
    no_multicast: bool,

    /// Silence (ms) after which a musician is no longer active
    #[arg(long, env = "ORCHESTRA_ACTIVE_WINDOW_MS", default_value_t = 5000)]
    active_window_ms: u64,
}

impl From<Args> for AuditorConfig {
    fn from(args: Args) -> Self {
        AuditorConfig {
            udp_bind: args.udp_bind,
            tcp_bind: args.tcp_bind,
            multicast_group: (!args.no_multicast).then_some(args.group),
            active_window: Duration::from_millis(args.active_window_ms),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AuditorConfig::from(Args::parse());
    tracing::info!(
        "Auditor starting: announcements on {}, queries on {}",
        config.udp_bind,
        config.tcp_bind
    );

    let auditor = AuditorService::bind(config, Arc::new(SystemClock)).await?;
    auditor.clone().start();

    let stats = auditor.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(STATS_INTERVAL);

        loop {
            interval.tick().await;
            tracing::info!("Roster stats: {} tracked musician(s)", stats.table.len());
        }
    });

    tracing::info!("Press Ctrl+C to shutdown");
    tokio::signal::ctrl_c().await?;
    tracing::info!("Auditor stopped");

    Ok(())
}
