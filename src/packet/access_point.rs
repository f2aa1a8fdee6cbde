//! SetAccessPoint, the onboarding packet
//!
//! Tells a virgin bulb which network to join. The SSID and PSK are fixed-width,
//! NUL-padded fields; anything longer is cut off without complaint.

use std::io::{self, Write};

use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::{
    INTERFACE_STATION, MSG_SET_ACCESS_POINT, ONBOARD_PACKET_SIZE, PSK_FIELD_SIZE, SSID_FIELD_SIZE,
};
use crate::packet::header::Header;
use crate::packet::security::{SecurityMode, DEFAULT_SECURITY_MODE};

/// Onboarding packet for a virgin bulb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardPacket {
    ssid: Vec<u8>,
    psk: Vec<u8>,
    security: SecurityMode,
}

/// First `max` bytes of `value`. May split a multi-byte character.
fn truncate(value: &str, max: usize) -> Vec<u8> {
    let bytes = value.as_bytes();
    bytes[..bytes.len().min(max)].to_vec()
}

impl OnboardPacket {
    /// Build a packet for the given network. No validation is done.
    pub fn new(ssid: &str, psk: &str) -> Self {
        Self {
            ssid: truncate(ssid, SSID_FIELD_SIZE),
            psk: truncate(psk, PSK_FIELD_SIZE),
            security: DEFAULT_SECURITY_MODE,
        }
    }

    /// SSID as it will be sent, before padding
    pub fn ssid(&self) -> &[u8] {
        &self.ssid
    }

    /// PSK as it will be sent, before padding
    pub fn psk(&self) -> &[u8] {
        &self.psk
    }

    pub fn security(&self) -> SecurityMode {
        self.security
    }

    /// Serialize to the 134 byte wire form
    pub fn to_bytes(&self) -> Bytes {
        let mut buffer = BytesMut::with_capacity(ONBOARD_PACKET_SIZE);

        Header::broadcast(MSG_SET_ACCESS_POINT, ONBOARD_PACKET_SIZE as u16).put(&mut buffer);
        buffer.put_u8(INTERFACE_STATION);

        buffer.put_slice(&self.ssid);
        buffer.put_bytes(0, SSID_FIELD_SIZE - self.ssid.len());

        buffer.put_slice(&self.psk);
        buffer.put_bytes(0, PSK_FIELD_SIZE - self.psk.len());

        buffer.put_u8(self.security.into());

        debug_assert_eq!(buffer.len(), ONBOARD_PACKET_SIZE);
        buffer.freeze()
    }

    /// Encode the packet to a writer
    pub fn encode<W: Write>(&self, writer: &mut W) -> io::Result<usize> {
        let bytes = self.to_bytes();
        writer.write_all(&bytes)?;
        Ok(bytes.len())
    }
}
