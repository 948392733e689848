//! Protocol Module Tests
//!
//! ## Test Scopes
//! - **Instrument catalogue**: name/sound lookups and CLI parsing.
//! - **Announcement decoding**: accepted shapes and rejected datagrams.
//! - **Roster encoding**: the exact JSON a query client receives.

#[cfg(test)]
mod tests {
    use crate::error::{ProtocolError, StartupError};
    use crate::membership::types::{MembershipEntry, MusicianId, Payload};
    use crate::protocol::instrument::Instrument;
    use crate::protocol::types::{ActiveMusician, Announcement, decode_roster, encode_roster};

    // ============================================================
    // INSTRUMENT TESTS
    // ============================================================

    #[test]
    fn test_instrument_sounds() {
        assert_eq!(Instrument::Piano.sound(), "ti-ta-ti");
        assert_eq!(Instrument::Trumpet.sound(), "pouet");
        assert_eq!(Instrument::Flute.sound(), "trulu");
        assert_eq!(Instrument::Violin.sound(), "gzi-gzi");
        assert_eq!(Instrument::Drum.sound(), "boum-boum");
    }

    #[test]
    fn test_instrument_parse() {
        assert_eq!("piano".parse::<Instrument>().unwrap(), Instrument::Piano);
        assert_eq!(" Drum ".parse::<Instrument>().unwrap(), Instrument::Drum);

        let err = "kazoo".parse::<Instrument>().unwrap_err();
        assert!(matches!(err, StartupError::UnknownInstrument(ref name) if name == "kazoo"));
    }

    #[test]
    fn test_instrument_from_sound() {
        for instrument in Instrument::ALL {
            assert_eq!(Instrument::from_sound(instrument.sound()), Some(instrument));
        }
        assert_eq!(Instrument::from_sound("bzzz"), None);
    }

    // ============================================================
    // ANNOUNCEMENT TESTS
    // ============================================================

    #[test]
    fn test_announcement_wire_shape() {
        let msg = Announcement::new(MusicianId::from("u1"), Instrument::Piano);
        let value: serde_json::Value = serde_json::from_slice(&msg.encode().unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"identity": "u1", "instrument": "piano", "sound": "ti-ta-ti"})
        );
    }

    #[test]
    fn test_decode_accepts_uuid_alias() {
        let msg = Announcement::decode(br#"{"uuid":"abc","sound":"pouet"}"#).unwrap();

        assert_eq!(msg.identity, MusicianId::from("abc"));
        assert_eq!(msg.payload.sound, "pouet");
        assert_eq!(msg.payload.instrument, "trumpet", "instrument recovered from sound");
    }

    #[test]
    fn test_decode_keeps_unknown_payload_as_is() {
        let msg =
            Announcement::decode(br#"{"identity":"abc","instrument":"theremin","sound":"wooo"}"#)
                .unwrap();

        assert_eq!(msg.payload, Payload::new("theremin", "wooo"));
    }

    #[test]
    fn test_decode_without_payload_fields() {
        let msg = Announcement::decode(br#"{"identity":"abc"}"#).unwrap();
        assert_eq!(msg.payload, Payload::default());
    }

    #[test]
    fn test_decode_rejects_missing_identity() {
        let err = Announcement::decode(br#"{"instrument":"piano","sound":"ti-ta-ti"}"#);
        assert!(matches!(err, Err(ProtocolError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_empty_identity() {
        let err = Announcement::decode(br#"{"identity":"  ","sound":"ti-ta-ti"}"#);
        assert!(matches!(err, Err(ProtocolError::MissingIdentity)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(Announcement::decode(b"not json at all").is_err());
        assert!(Announcement::decode(&[0xff, 0xfe, 0x00]).is_err());
        assert!(Announcement::decode(b"[1,2,3]").is_err());
        assert!(Announcement::decode(br#"{"identity":42}"#).is_err());
    }

    // ============================================================
    // ROSTER TESTS
    // ============================================================

    #[test]
    fn test_empty_roster_is_empty_array() {
        assert_eq!(encode_roster(&[]).unwrap(), b"[]");
        assert!(decode_roster(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_roster_record_shape() {
        let record = ActiveMusician::from(MembershipEntry {
            id: MusicianId::from("u1"),
            payload: Payload::new("piano", "ti-ta-ti"),
            last_seen: 1_700_000_000_000,
        });

        let value: serde_json::Value =
            serde_json::from_slice(&encode_roster(&[record]).unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!([{
                "identity": "u1",
                "instrument": "piano",
                "sound": "ti-ta-ti",
                "last_seen": 1_700_000_000_000u64
            }])
        );
    }
}
