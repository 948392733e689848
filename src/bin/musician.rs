use anyhow::Result;
use clap::Parser;
use orchestra::config::MusicianConfig;
use orchestra::musician::service::Musician;
use orchestra::protocol::instrument::Instrument;
use orchestra::protocol::{MULTICAST_GROUP, MULTICAST_TTL, PROTOCOL_PORT};
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Plays an instrument in the orchestra: announces its sound every period.
#[derive(Debug, Parser)]
#[command(name = "musician", version)]
struct Args {
    /// One of: piano, trumpet, flute, violin, drum
    instrument: String,

    /// Where announcements are sent
    #[arg(long, env = "ORCHESTRA_TARGET", default_value_t = SocketAddr::from((MULTICAST_GROUP, PROTOCOL_PORT)))]
    target: SocketAddr,

    /// Announcement period in milliseconds
    #[arg(long, env = "ORCHESTRA_PERIOD_MS", default_value_t = 1000)]
    period_ms: u64,

    /// Multicast TTL for announcements
    #[arg(long, env = "ORCHESTRA_TTL", default_value_t = MULTICAST_TTL)]
    ttl: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let instrument: Instrument = args.instrument.parse()?;

    let config = MusicianConfig {
        target: args.target,
        period: Duration::from_millis(args.period_ms),
        multicast_ttl: args.ttl,
    };

    let musician = Musician::new(instrument, config).await?;
    musician.play().await;

    Ok(())
}
