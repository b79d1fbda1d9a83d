//! # Configuration Management
//!
//! Wire constants and link identity configuration.
//!
//! This module centralizes the constants of the wire format and the
//! process-wide link identity (local address and radio group) that outgoing
//! messages fall back to when a sender does not set source or group
//! explicitly.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Environment variables via `from_env()`
//! - Direct instantiation with defaults

use crate::core::packet::MessageFactory;
use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Size of the fixed message header in bytes
pub const HEADER_SIZE: usize = 8;

/// Max payload bytes a single message can carry (255 minus the header)
pub const MAX_PAYLOAD_SIZE: usize = 255 - HEADER_SIZE;

/// Leading dispatch marker distinguishing this packet format from other
/// frame types on the same transport. Written as-is on encode, ignored on
/// decode.
pub const DISPATCH_BYTE: u8 = 0x00;

/// Radio group shared by every node on a stock deployment
pub const DEFAULT_GROUP: u8 = 0x22;

/// Address the host claims on the link unless configured otherwise
pub const DEFAULT_ADDRESS: u16 = 0x0001;

/// Address reserved for broadcast; never valid as a local identity
pub const BROADCAST_ADDRESS: u16 = 0xFFFF;

/// Link identity configuration: the defaults stamped into every message
/// minted for this link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LinkConfig {
    /// 16-bit address reported as the source of outgoing messages
    pub address: u16,

    /// Radio group shared with the nodes on this link
    pub group: u8,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            group: DEFAULT_GROUP,
        }
    }
}

impl LinkConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Start with defaults
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(address) = std::env::var("MOTE_PROTOCOL_ADDRESS") {
            if let Ok(val) = address.parse::<u16>() {
                config.address = val;
            }
        }

        if let Ok(group) = std::env::var("MOTE_PROTOCOL_GROUP") {
            if let Ok(val) = group.parse::<u8>() {
                config.group = val;
            }
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.address == BROADCAST_ADDRESS {
            errors.push(format!(
                "Local address cannot be the broadcast address (0x{BROADCAST_ADDRESS:04X})"
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }

    /// Build the message factory carrying this link's identity
    pub fn factory(&self) -> MessageFactory {
        MessageFactory::new(self.group, self.address)
    }
}
