use serde::{Deserialize, Serialize};

/// Identity of one musician process.
///
/// Generated once at startup and never changed; used as the membership key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MusicianId(pub String);

impl MusicianId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for MusicianId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for MusicianId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// What a musician plays. Opaque to the protocol; never validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payload {
    #[serde(default)]
    pub instrument: String,
    #[serde(default)]
    pub sound: String,
}

impl Payload {
    pub fn new(instrument: impl Into<String>, sound: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            sound: sound.into(),
        }
    }
}

/// The auditor's record of one musician.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipEntry {
    pub id: MusicianId,
    pub payload: Payload,
    /// Milliseconds since the Unix epoch, stamped by the auditor on receipt.
    pub last_seen: u64,
}

impl MembershipEntry {
    /// Inclusive boundary: exactly `window_ms` of silence is still active.
    /// A `last_seen` ahead of `now` (upsert raced a query) counts as active.
    pub fn is_active(&self, now: u64, window_ms: u64) -> bool {
        now.saturating_sub(self.last_seen) <= window_ms
    }
}
