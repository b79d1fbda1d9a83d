//! # Core Protocol Components
//!
//! Low-level message handling and the serial-forwarder wire format.
//!
//! This module provides the foundation for the protocol: the message type,
//! its binary encoding, and a stream codec for framing messages over byte
//! streams.
//!
//! ## Components
//! - **Packet**: addressed, typed, length-delimited message format
//! - **Codec**: tokio codec for framing messages over byte streams
//!
//! ## Wire Format
//! ```text
//! [Dispatch(1)] [Destination(2)] [Source(2)] [Length(1)] [Group(1)] [Type(1)] [Payload(N)]
//! ```
//! Multi-byte fields are big-endian. The length byte equals the payload byte
//! count, 0 ≤ N ≤ 247.
//!
//! ## Robustness
//! - Maximum payload size: 247 bytes (255 minus the 8-byte header)
//! - Length validation before payload allocation
//! - Malformed frames are rejected with typed errors, never panics

pub mod codec;
pub mod packet;
