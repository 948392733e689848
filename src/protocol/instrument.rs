//! Instrument Catalogue
//!
//! The fixed mapping between instrument names and the sound each one plays.
//! Musicians use it to build their payload; the auditor uses the reverse lookup
//! to recover the instrument from announcements that only carry a sound.

use crate::error::StartupError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    Piano,
    Trumpet,
    Flute,
    Violin,
    Drum,
}

impl Instrument {
    pub const ALL: [Instrument; 5] = [
        Instrument::Piano,
        Instrument::Trumpet,
        Instrument::Flute,
        Instrument::Violin,
        Instrument::Drum,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Instrument::Piano => "piano",
            Instrument::Trumpet => "trumpet",
            Instrument::Flute => "flute",
            Instrument::Violin => "violin",
            Instrument::Drum => "drum",
        }
    }

    pub fn sound(&self) -> &'static str {
        match self {
            Instrument::Piano => "ti-ta-ti",
            Instrument::Trumpet => "pouet",
            Instrument::Flute => "trulu",
            Instrument::Violin => "gzi-gzi",
            Instrument::Drum => "boum-boum",
        }
    }

    /// Reverse lookup used by the auditor when a datagram omits the instrument.
    pub fn from_sound(sound: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.sound() == sound)
    }
}

impl FromStr for Instrument {
    type Err = StartupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.name() == wanted)
            .ok_or_else(|| StartupError::UnknownInstrument(s.to_string()))
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
