//! Packet handling for LIFX onboarding
//!
//! This module provides the LIFX frame header and the SetAccessPoint
//! packet a virgin bulb needs to join a network.

mod access_point;
mod header;
mod security;

// Re-export key components
pub use access_point::OnboardPacket;
pub use header::Header;
pub use security::{SecurityMode, DEFAULT_SECURITY_MODE};
