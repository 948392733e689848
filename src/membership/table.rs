use dashmap::DashMap;
use std::time::Duration;

use super::types::{MembershipEntry, MusicianId, Payload};

/// The auditor's roster: one entry per musician identity.
///
/// Entries are only ever removed by [`MembershipTable::snapshot_active`].
#[derive(Debug, Default)]
pub struct MembershipTable {
    entries: DashMap<MusicianId, MembershipEntry>,
}

impl MembershipTable {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Inserts or overwrites the entry for `id`. The previous entry, if any, is
    /// replaced wholesale, including an older payload or a later `last_seen`.
    pub fn upsert(&self, id: MusicianId, payload: Payload, now: u64) {
        let entry = MembershipEntry {
            id: id.clone(),
            payload,
            last_seen: now,
        };

        if self.entries.insert(id, entry).is_none() {
            tracing::debug!("New musician tracked (roster size {})", self.entries.len());
        }
    }

    /// Returns every entry with `now - last_seen <= window` and removes the rest.
    ///
    /// Both happen in one `retain` pass: each entry's timestamp is read and its
    /// fate decided under the same shard lock, so an upsert racing this call is
    /// never deleted on the strength of a stale timestamp.
    pub fn snapshot_active(&self, now: u64, window: Duration) -> Vec<MembershipEntry> {
        let window_ms = window.as_millis() as u64;
        let mut active = Vec::new();
        let mut evicted = 0usize;

        self.entries.retain(|_, entry| {
            if entry.is_active(now, window_ms) {
                active.push(entry.clone());
                true
            } else {
                evicted += 1;
                false
            }
        });

        if evicted > 0 {
            tracing::info!(
                "Evicted {} silent musician(s), {} still active",
                evicted,
                active.len()
            );
        }

        active
    }

    /// Number of tracked entries, expired or not. Does not evict.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only lookup. Does not evict.
    pub fn get(&self, id: &MusicianId) -> Option<MembershipEntry> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }
}
