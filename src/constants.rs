//! Constants used throughout the onboarding crate

use std::net::Ipv4Addr;

/// Address a virgin bulb gives itself on its own access point
pub const DEFAULT_BULB_ADDRESS: Ipv4Addr = Ipv4Addr::new(172, 16, 0, 1);

/// LIFX LAN protocol port; virgin bulbs accept TLS connections here
pub const DEFAULT_BULB_PORT: u16 = 56700;

/// Size of the LIFX frame header
pub const HEADER_SIZE: usize = 36;

/// Size of the constant part that precedes the SSID: header plus interface byte
pub const PREAMBLE_SIZE: usize = HEADER_SIZE + 1;

/// Width of the SSID field
pub const SSID_FIELD_SIZE: usize = 32;

/// Width of the PSK field
pub const PSK_FIELD_SIZE: usize = 64;

/// Total size of a SetAccessPoint frame
pub const ONBOARD_PACKET_SIZE: usize = PREAMBLE_SIZE + SSID_FIELD_SIZE + PSK_FIELD_SIZE + 1;

/// LIFX LAN protocol number
pub const LIFX_PROTOCOL: u16 = 1024;

/// Frame flag: the frame carries a target address
pub const FLAG_ADDRESSABLE: u16 = 1 << 12;

/// Frame flag: the frame is meant for all devices (target is zero)
pub const FLAG_TAGGED: u16 = 1 << 13;

/// Message type of SetAccessPoint
pub const MSG_SET_ACCESS_POINT: u16 = 305;

/// Interface byte of SetAccessPoint: join as a station
pub const INTERFACE_STATION: u8 = 2;

/// The preamble as it appears on the wire
pub const ONBOARD_PREAMBLE: [u8; PREAMBLE_SIZE] = [
    0x86, 0x00, 0x00, 0x34, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x31, 0x01, 0x00, 0x00, 0x02,
];

/// Our long about text, describing briefly what this program does and what it does not.
pub static LONG_ABOUT: &str = r###"
Sends a single SetAccessPoint packet to a virgin LIFX bulb, telling it to join
your WiFi network using the SSID and password given on the command line.

Only use this while connected to the bulb's own access point. There is no
response checking; if the write goes through, the bulb probably got it.
The bulb's TLS stack is old, so certificate checks are disabled.
"###;
