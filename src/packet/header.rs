//! LIFX LAN frame header
//!
//! Every LIFX message starts with a 36 byte little-endian header made of three
//! parts: the frame (size, protocol, flags, source), the frame address (target,
//! ack/res flags, sequence) and the protocol header (message type).

use bytes::{BufMut, BytesMut};

use crate::constants::{FLAG_ADDRESSABLE, FLAG_TAGGED, HEADER_SIZE, LIFX_PROTOCOL};

/// LIFX frame header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Size of the whole message, header included
    pub size: u16,
    /// Message goes to every device rather than `target`
    pub tagged: bool,
    /// Client-chosen identifier echoed in replies
    pub source: u32,
    /// Device MAC address, or zero
    pub target: u64,
    /// Ask for an acknowledgement
    pub ack_required: bool,
    /// Ask for a state response
    pub res_required: bool,
    /// Wrap-around sequence number
    pub sequence: u8,
    /// Message type
    pub message_type: u16,
}

impl Header {
    /// Broadcast header for a message of the given type and total size
    pub fn broadcast(message_type: u16, size: u16) -> Self {
        Self {
            size,
            tagged: true,
            source: 0,
            target: 0,
            ack_required: false,
            res_required: false,
            sequence: 0,
            message_type,
        }
    }

    /// Append the header to `buffer`
    pub fn put(&self, buffer: &mut BytesMut) {
        buffer.reserve(HEADER_SIZE);

        // Frame
        buffer.put_u16_le(self.size);
        let mut protocol = LIFX_PROTOCOL | FLAG_ADDRESSABLE;
        if self.tagged {
            protocol |= FLAG_TAGGED;
        }
        buffer.put_u16_le(protocol);
        buffer.put_u32_le(self.source);

        // Frame address
        buffer.put_u64_le(self.target);
        buffer.put_bytes(0, 6);
        let mut flags = 0u8;
        if self.res_required {
            flags |= 0x01;
        }
        if self.ack_required {
            flags |= 0x02;
        }
        buffer.put_u8(flags);
        buffer.put_u8(self.sequence);

        // Protocol header
        buffer.put_u64_le(0);
        buffer.put_u16_le(self.message_type);
        buffer.put_u16_le(0);
    }
}
