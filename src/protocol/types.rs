use super::instrument::Instrument;
use crate::error::ProtocolError;
use crate::membership::types::{MembershipEntry, MusicianId, Payload};
use serde::{Deserialize, Serialize};

/// A single liveness datagram sent by a musician.
///
/// The receive time is not part of the message: the auditor stamps each
/// announcement with its own clock when the datagram is processed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Announcement {
    #[serde(alias = "uuid")]
    pub identity: MusicianId,

    #[serde(flatten)]
    pub payload: Payload,
}

impl Announcement {
    pub fn new(identity: MusicianId, instrument: Instrument) -> Self {
        Self {
            identity,
            payload: Payload {
                instrument: instrument.name().to_string(),
                sound: instrument.sound().to_string(),
            },
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parses a datagram, rejecting anything without a usable identity.
    pub fn decode(buf: &[u8]) -> Result<Self, ProtocolError> {
        let mut announcement: Announcement = serde_json::from_slice(buf)?;

        if announcement.identity.0.trim().is_empty() {
            return Err(ProtocolError::MissingIdentity);
        }

        if announcement.payload.instrument.is_empty()
            && let Some(instrument) = Instrument::from_sound(&announcement.payload.sound)
        {
            announcement.payload.instrument = instrument.name().to_string();
        }

        Ok(announcement)
    }
}

/// One record of the query response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveMusician {
    pub identity: MusicianId,

    #[serde(flatten)]
    pub payload: Payload,

    /// Milliseconds since the Unix epoch of the last accepted announcement.
    pub last_seen: u64,
}

impl From<MembershipEntry> for ActiveMusician {
    fn from(entry: MembershipEntry) -> Self {
        Self {
            identity: entry.id,
            payload: entry.payload,
            last_seen: entry.last_seen,
        }
    }
}

pub fn encode_roster(roster: &[ActiveMusician]) -> Result<Vec<u8>, ProtocolError> {
    Ok(serde_json::to_vec(roster)?)
}

pub fn decode_roster(buf: &[u8]) -> Result<Vec<ActiveMusician>, ProtocolError> {
    Ok(serde_json::from_slice(buf)?)
}
