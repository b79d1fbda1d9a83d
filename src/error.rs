//! # Error Types
//!
//! Error handling for the message codec.
//!
//! This module defines all error variants that can occur while encoding or
//! decoding serial-forwarder messages, plus configuration failures.
//!
//! ## Error Categories
//! - **Encode Errors**: payload exceeds the wire format's capacity
//! - **Decode Errors**: truncated input, length byte disagreeing with the data
//! - **Configuration Errors**: invalid link configuration
//! - **I/O Errors**: stream failures surfaced through the codec adapter
//!
//! All caller-facing failures are returned as values, never panics, so
//! transport code can log-and-drop a malformed frame without crashing the
//! link.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

// ProtocolError is the primary error type for all codec operations
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    /// Serialize was attempted with a payload exceeding the wire limit.
    /// No bytes are emitted.
    #[error("Payload too large: {0} bytes")]
    PayloadTooLarge(usize),

    /// Decode input was shorter than the fixed header.
    #[error("Truncated header: {0} bytes")]
    TruncatedHeader(usize),

    /// The header length byte disagrees with the bytes actually present
    /// after the fixed header. Both values are carried for diagnostics.
    #[error("Payload length mismatch: header={declared}, actual={actual}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
