//! LIFX onboarding library
//!
//! Builds the SetAccessPoint packet that tells a factory-fresh LIFX bulb
//! which WiFi network to join, and delivers it over the bulb's TLS port.

pub mod constants;
pub mod errors;
pub mod onboard;
pub mod packet;
pub mod settings;
pub mod transport;

// Re-export key components for easier access
pub use errors::Error;
pub use onboard::{run, OnboardRequest};
pub use packet::{OnboardPacket, SecurityMode, DEFAULT_SECURITY_MODE};
pub use settings::Settings;
pub use transport::{InsecureTlsProfile, TlsTransport, Transport};
