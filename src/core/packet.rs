//! # Message Format
//!
//! The serial-forwarder message: an addressed, typed, length-delimited
//! packet exchanged between a host and embedded nodes.
//!
//! A [`MessageFactory`] holds the link's default group and source address.
//! Senders usually populate only destination, type, and payload; source and
//! group are filled from the link identity unless explicitly overridden.
//! Overrides are modeled as `Option` fields so the accessors always resolve
//! to a concrete value.
//!
//! ## Example
//! ```
//! use mote_protocol::{MessageFactory, Packet, PacketFactory};
//!
//! # fn main() -> mote_protocol::Result<()> {
//! let factory = MessageFactory::new(0x22, 0x0001);
//! let mut msg = factory.create();
//! msg.set_destination(0x0002);
//! msg.set_kind(0x05);
//! msg.set_payload(vec![0x01, 0x02, 0x03]);
//!
//! let bytes = msg.to_bytes()?;
//! assert_eq!(bytes, [0x00, 0x00, 0x02, 0x00, 0x01, 0x03, 0x22, 0x05, 0x01, 0x02, 0x03]);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::config::{DISPATCH_BYTE, HEADER_SIZE, MAX_PAYLOAD_SIZE};
use crate::error::{ProtocolError, Result};

/// An addressed, typed packet that can be encoded to and decoded from the
/// wire. Transport and dispatch layers consume this polymorphically.
pub trait Packet: fmt::Display {
    /// Message-type tag
    fn kind(&self) -> u8;
    fn set_kind(&mut self, kind: u8);

    /// Resolved group: the explicit override if one was set, else the
    /// link default
    fn group(&self) -> u8;
    fn set_group(&mut self, group: u8);

    fn destination(&self) -> u16;
    fn set_destination(&mut self, destination: u16);

    /// Resolved source address, same override-or-default rule as `group`
    fn source(&self) -> u16;
    fn set_source(&mut self, source: u16);

    fn payload(&self) -> &[u8];
    fn set_payload(&mut self, payload: Vec<u8>);

    /// Encode the packet into its exact wire representation
    fn to_bytes(&self) -> Result<Vec<u8>>;

    /// Populate the packet from a received wire frame. On failure no fields
    /// are mutated.
    fn from_bytes(&mut self, data: &[u8]) -> Result<()>;
}

/// Mints fresh, empty packets carrying the link's default identity.
/// Transport code uses this to obtain a packet to decode into.
pub trait PacketFactory {
    type Packet: Packet;

    fn create(&self) -> Self::Packet;
}

/// A single serial-forwarder message.
///
/// Source and group are tracked as optional overrides; until set they report
/// the defaults the message was minted with. Decoding always stores the
/// wire-carried values as overrides, so a decoded message reports what was
/// actually on the wire even when it matches the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    destination: u16,
    source: Option<u16>,
    group: Option<u8>,
    kind: u8,
    payload: Vec<u8>,

    default_source: u16,
    default_group: u8,
}

impl Message {
    /// Create an empty message with the given link defaults
    pub fn new(default_group: u8, default_source: u16) -> Self {
        Self {
            destination: 0,
            source: None,
            group: None,
            kind: 0,
            payload: Vec::new(),
            default_source,
            default_group,
        }
    }
}

impl Packet for Message {
    fn kind(&self) -> u8 {
        self.kind
    }

    fn set_kind(&mut self, kind: u8) {
        self.kind = kind;
    }

    fn group(&self) -> u8 {
        self.group.unwrap_or(self.default_group)
    }

    fn set_group(&mut self, group: u8) {
        self.group = Some(group);
    }

    fn destination(&self) -> u16 {
        self.destination
    }

    fn set_destination(&mut self, destination: u16) {
        self.destination = destination;
    }

    fn source(&self) -> u16 {
        self.source.unwrap_or(self.default_source)
    }

    fn set_source(&mut self, source: u16) {
        self.source = Some(source);
    }

    fn payload(&self) -> &[u8] {
        &self.payload
    }

    fn set_payload(&mut self, payload: Vec<u8>) {
        self.payload = payload;
    }

    fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.payload.len() > MAX_PAYLOAD_SIZE {
            return Err(ProtocolError::PayloadTooLarge(self.payload.len()));
        }

        let mut buf = Vec::with_capacity(HEADER_SIZE + self.payload.len());
        buf.push(DISPATCH_BYTE);
        buf.extend_from_slice(&self.destination().to_be_bytes());
        buf.extend_from_slice(&self.source().to_be_bytes());
        buf.push(self.payload.len() as u8);
        buf.push(self.group());
        buf.push(self.kind());
        buf.extend_from_slice(&self.payload);

        Ok(buf)
    }

    fn from_bytes(&mut self, data: &[u8]) -> Result<()> {
        if data.len() < HEADER_SIZE {
            return Err(ProtocolError::TruncatedHeader(data.len()));
        }

        let declared = data[5] as usize;
        let actual = data.len() - HEADER_SIZE;
        if declared != actual {
            return Err(ProtocolError::LengthMismatch { declared, actual });
        }

        // data[0] is the dispatch marker: read and discarded, not validated
        self.set_destination(u16::from_be_bytes([data[1], data[2]]));
        self.set_source(u16::from_be_bytes([data[3], data[4]]));
        self.set_group(data[6]);
        self.set_kind(data[7]);
        self.payload = data[HEADER_SIZE..].to_vec();

        Ok(())
    }
}

impl fmt::Display for Message {
    /// `SRC->DST[TYPE] LEN: PAYLOAD_HEX`, addresses as 4-digit uppercase
    /// hex, type as 2-digit uppercase hex, length right-justified to 3
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04X}->{:04X}[{:02X}]{:3}: ",
            self.source(),
            self.destination(),
            self.kind(),
            self.payload.len()
        )?;
        for byte in &self.payload {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

/// Stateless factory holding the link identity copied into every message it
/// mints. Read-only after construction; safe to share across callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFactory {
    default_group: u8,
    default_source: u16,
}

impl MessageFactory {
    pub fn new(default_group: u8, default_source: u16) -> Self {
        Self {
            default_group,
            default_source,
        }
    }

    pub fn default_group(&self) -> u8 {
        self.default_group
    }

    pub fn default_source(&self) -> u16 {
        self.default_source
    }
}

impl PacketFactory for MessageFactory {
    type Packet = Message;

    fn create(&self) -> Message {
        Message::new(self.default_group, self.default_source)
    }
}
