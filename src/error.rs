//! Error Types
//!
//! Membership table operations never fail; errors only exist at the edges:
//! decoding what arrives from the network and validating startup input.

use thiserror::Error;

/// Problems with a datagram or response body. Always handled where they occur.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("announcement has no identity")]
    MissingIdentity,
}

/// Fatal problems detected before any socket is opened.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("unknown instrument '{0}' (expected one of: piano, trumpet, flute, violin, drum)")]
    UnknownInstrument(String),
}
