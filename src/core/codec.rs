//! # Message Codec
//!
//! Tokio codec for framing serial-forwarder messages over byte streams.
//!
//! Messages are self-delimiting: the header carries the payload length, so
//! the decoder can recover frame boundaries from a raw stream without any
//! outer framing. Decoded messages are minted from a [`MessageFactory`] and
//! therefore carry the link's default identity.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{trace, warn};

use crate::config::HEADER_SIZE;
use crate::core::packet::{Message, MessageFactory, Packet, PacketFactory};
use crate::error::ProtocolError;

/// Stream codec for the serial-forwarder message format
pub struct MessageCodec {
    factory: MessageFactory,
}

impl MessageCodec {
    pub fn new(factory: MessageFactory) -> Self {
        Self { factory }
    }
}

impl Decoder for MessageCodec {
    type Item = Message;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Message>, ProtocolError> {
        if src.len() < HEADER_SIZE {
            // Not enough data for the fixed header yet
            return Ok(None);
        }

        let declared = src[5] as usize;
        let frame_len = HEADER_SIZE + declared;
        if src.len() < frame_len {
            src.reserve(frame_len - src.len());
            return Ok(None);
        }

        let frame = src.split_to(frame_len);
        let mut msg = self.factory.create();
        msg.from_bytes(&frame)?;
        trace!(len = declared, "decoded message frame");
        Ok(Some(msg))
    }
}

impl Encoder<Message> for MessageCodec {
    type Error = ProtocolError;

    fn encode(&mut self, msg: Message, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        let bytes = msg.to_bytes().map_err(|e| {
            warn!(error = %e, "refusing to encode message");
            e
        })?;

        dst.reserve(bytes.len());
        dst.put_slice(&bytes);
        trace!(len = bytes.len() - HEADER_SIZE, "encoded message frame");
        Ok(())
    }
}
