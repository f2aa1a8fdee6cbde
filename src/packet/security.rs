//! WiFi security modes understood by SetAccessPoint

use crate::errors::Error;

/// Security used by the network the bulb should join
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SecurityMode {
    /// No security
    Open = 1,
    /// WEP with a pre-shared key (bulbs reportedly reject it)
    WepPsk = 2,
    /// WPA, TKIP cipher
    WpaTkipPsk = 3,
    /// WPA, AES cipher
    WpaAesPsk = 4,
    /// WPA2, AES cipher
    Wpa2AesPsk = 5,
    /// WPA2, TKIP cipher
    Wpa2TkipPsk = 6,
    /// WPA2, AES and TKIP
    Wpa2MixedPsk = 7,
}

/// The mode written into every onboarding packet. Change and rebuild for other networks.
pub const DEFAULT_SECURITY_MODE: SecurityMode = SecurityMode::Wpa2AesPsk;

impl SecurityMode {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            SecurityMode::Open => "OPEN",
            SecurityMode::WepPsk => "WEP_PSK",
            SecurityMode::WpaTkipPsk => "WPA_TKIP_PSK",
            SecurityMode::WpaAesPsk => "WPA_AES_PSK",
            SecurityMode::Wpa2AesPsk => "WPA2_AES_PSK",
            SecurityMode::Wpa2TkipPsk => "WPA2_TKIP_PSK",
            SecurityMode::Wpa2MixedPsk => "WPA2_MIXED_PSK",
        }
    }
}

impl TryFrom<u8> for SecurityMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SecurityMode::Open),
            2 => Ok(SecurityMode::WepPsk),
            3 => Ok(SecurityMode::WpaTkipPsk),
            4 => Ok(SecurityMode::WpaAesPsk),
            5 => Ok(SecurityMode::Wpa2AesPsk),
            6 => Ok(SecurityMode::Wpa2TkipPsk),
            7 => Ok(SecurityMode::Wpa2MixedPsk),
            _ => Err(Error::UnknownSecurityMode(value)),
        }
    }
}

impl From<SecurityMode> for u8 {
    fn from(mode: SecurityMode) -> u8 {
        mode as u8
    }
}
