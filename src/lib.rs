//! # mote-protocol
//!
//! Wire-format codec core for host-to-mote serial forwarder links.
//!
//! This crate implements the fixed binary format for addressed, typed,
//! length-delimited messages exchanged between a host and a network of
//! embedded nodes. It is the encoding/decoding layer only: serial I/O,
//! connection management, and dispatch by message type belong to the
//! transport layers consuming the [`Packet`] and [`PacketFactory`]
//! capabilities.
//!
//! ## Wire Format
//! ```text
//! [Dispatch(1)] [Destination(2)] [Source(2)] [Length(1)] [Group(1)] [Type(1)] [Payload(N)]
//! ```
//!
//! ## Example
//! ```
//! use mote_protocol::{LinkConfig, Packet, PacketFactory};
//!
//! # fn main() -> mote_protocol::Result<()> {
//! let factory = LinkConfig::default().factory();
//!
//! let mut msg = factory.create();
//! msg.set_destination(0x0002);
//! msg.set_kind(0x05);
//! msg.set_payload(vec![0x01, 0x02, 0x03]);
//!
//! let bytes = msg.to_bytes()?;
//!
//! let mut received = factory.create();
//! received.from_bytes(&bytes)?;
//! assert_eq!(received.payload(), [0x01, 0x02, 0x03]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;

pub use crate::config::LinkConfig;
pub use crate::core::codec::MessageCodec;
pub use crate::core::packet::{Message, MessageFactory, Packet, PacketFactory};
pub use crate::error::{ProtocolError, Result};
