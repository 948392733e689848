//! Auditor Module
//!
//! The collector side of the protocol. One `AuditorService` owns the membership table
//! and runs two independent loops that share it:
//!
//! - **Ingest loop** (UDP): decodes announcements and upserts the table with the
//!   auditor's current time. Bad datagrams are logged and dropped.
//! - **Query loop** (TCP): every accepted connection gets one snapshot+evict pass,
//!   serialized as JSON, after which the connection is closed.
//!
//! `client` holds the matching one-shot query helper.

pub mod client;
pub mod service;
