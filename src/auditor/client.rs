use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::protocol::types::{ActiveMusician, decode_roster};

/// Performs one query against an auditor and returns the active roster.
///
/// The auditor writes the whole response and closes the connection, so the body
/// is read until EOF.
pub async fn fetch_active(addr: SocketAddr) -> Result<Vec<ActiveMusician>> {
    let mut stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("Failed to connect to auditor at {}", addr))?;

    let mut body = Vec::new();
    stream.read_to_end(&mut body).await?;

    let roster = decode_roster(&body)?;
    tracing::debug!("Auditor at {} reported {} musician(s)", addr, roster.len());

    Ok(roster)
}
