//! Property-based tests using proptest
//!
//! These tests validate codec invariants across a wide range of randomly
//! generated inputs, ensuring robust behavior under all conditions.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use mote_protocol::config::{HEADER_SIZE, MAX_PAYLOAD_SIZE};
use mote_protocol::{MessageFactory, Packet, PacketFactory, ProtocolError};
use proptest::prelude::*;

// Property: Any valid message round-trips through the wire format
proptest! {
    #[test]
    fn prop_message_roundtrip(
        destination: u16,
        source: u16,
        group: u8,
        kind: u8,
        payload in prop::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
    ) {
        let factory = MessageFactory::new(0x22, 0x0001);
        let mut msg = factory.create();
        msg.set_destination(destination);
        msg.set_source(source);
        msg.set_group(group);
        msg.set_kind(kind);
        msg.set_payload(payload.clone());

        let bytes = msg.to_bytes().expect("Serialization should not fail");
        prop_assert_eq!(bytes.len(), HEADER_SIZE + payload.len());

        let mut decoded = factory.create();
        decoded.from_bytes(&bytes).expect("Deserialization should not fail");

        prop_assert_eq!(decoded.destination(), destination);
        prop_assert_eq!(decoded.source(), source);
        prop_assert_eq!(decoded.group(), group);
        prop_assert_eq!(decoded.kind(), kind);
        prop_assert_eq!(decoded.payload(), &payload[..]);
    }
}

// Property: Serialization is deterministic
proptest! {
    #[test]
    fn prop_serialization_deterministic(
        destination: u16,
        kind: u8,
        payload in prop::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
    ) {
        let factory = MessageFactory::new(0x22, 0x0001);
        let mut msg = factory.create();
        msg.set_destination(destination);
        msg.set_kind(kind);
        msg.set_payload(payload);

        let bytes1 = msg.to_bytes().expect("Serialization should not fail");
        let bytes2 = msg.to_bytes().expect("Serialization should not fail");

        prop_assert_eq!(bytes1, bytes2);
    }
}

// Property: Messages with no explicit identity carry the factory defaults
proptest! {
    #[test]
    fn prop_default_identity_serialized(
        default_group: u8,
        default_source: u16,
        destination: u16,
        payload in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let factory = MessageFactory::new(default_group, default_source);
        let mut msg = factory.create();
        msg.set_destination(destination);
        msg.set_payload(payload);

        let bytes = msg.to_bytes().expect("Serialization should not fail");
        prop_assert_eq!(&bytes[3..5], &default_source.to_be_bytes()[..]);
        prop_assert_eq!(bytes[6], default_group);
    }
}

// Property: A corrupted length byte is always rejected
proptest! {
    #[test]
    fn prop_corrupted_length_rejected(
        destination: u16,
        wrong_length: u8,
        payload in prop::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
    ) {
        prop_assume!(wrong_length as usize != payload.len());

        let factory = MessageFactory::new(0x22, 0x0001);
        let mut msg = factory.create();
        msg.set_destination(destination);
        msg.set_payload(payload.clone());

        let mut bytes = msg.to_bytes().expect("Serialization should not fail");
        bytes[5] = wrong_length;

        let mut decoded = factory.create();
        let result = decoded.from_bytes(&bytes);
        prop_assert!(matches!(
            result,
            Err(ProtocolError::LengthMismatch { declared, actual })
                if declared == wrong_length as usize && actual == payload.len()
        ), "expected LengthMismatch error");
    }
}

// Property: Any payload above the wire limit is refused
proptest! {
    #[test]
    fn prop_oversized_payload_rejected(len in (MAX_PAYLOAD_SIZE + 1)..=1024usize) {
        let factory = MessageFactory::new(0x22, 0x0001);
        let mut msg = factory.create();
        msg.set_payload(vec![0u8; len]);

        let result = msg.to_bytes();
        prop_assert!(matches!(result, Err(ProtocolError::PayloadTooLarge(l)) if l == len));
    }
}

// Property: Truncated buffers always fail before the length check
proptest! {
    #[test]
    fn prop_truncated_input_rejected(data in prop::collection::vec(any::<u8>(), 0..HEADER_SIZE)) {
        let factory = MessageFactory::new(0x22, 0x0001);
        let mut msg = factory.create();

        let result = msg.from_bytes(&data);
        prop_assert!(matches!(
            result,
            Err(ProtocolError::TruncatedHeader(n)) if n == data.len()
        ));
    }
}
