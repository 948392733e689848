//! Musician Module
//!
//! The announcer side of the protocol. A musician picks an identity and an instrument
//! at startup and keeps both for its whole life. On every tick of a fixed period it
//! sends one announcement datagram to the multicast group.
//!
//! There is no acknowledgement and no retry: a failed send is a missed announcement,
//! which the auditor's active window already tolerates.

pub mod service;

#[cfg(test)]
mod tests;
