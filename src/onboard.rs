//! Confirm, build, send

use log::{debug, info};

use crate::errors::Error;
use crate::packet::OnboardPacket;
use crate::transport::Transport;

/// What the user asked for on the command line
#[derive(Debug, Clone)]
pub struct OnboardRequest {
    /// Network the bulb should join
    pub ssid: String,
    /// Password for that network
    pub psk: String,
}

impl OnboardRequest {
    pub fn new(ssid: impl Into<String>, psk: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            psk: psk.into(),
        }
    }

    pub fn packet(&self) -> OnboardPacket {
        OnboardPacket::new(&self.ssid, &self.psk)
    }
}

/// Build the packet, ask `confirm`, and hand the packet to `transport`.
///
/// `confirm` sees the packet with its truncated fields. Returning `false`
/// gives [`Error::Declined`] and the transport is never used.
pub fn run<C, T>(request: &OnboardRequest, confirm: C, transport: &mut T) -> Result<OnboardPacket, Error>
where
    C: FnOnce(&OnboardPacket) -> Result<bool, Error>,
    T: Transport + ?Sized,
{
    let packet = request.packet();
    debug!(
        "Built SetAccessPoint: ssid {} bytes, psk {} bytes, security {}",
        packet.ssid().len(),
        packet.psk().len(),
        packet.security().name()
    );

    if !confirm(&packet)? {
        debug!("User declined");
        return Err(Error::Declined);
    }

    transport.send(&packet.to_bytes())?;
    info!("Onboarding packet delivered");
    Ok(packet)
}
