//! Optional config file
//!
//! Only read when the user asks for it with `--config`. Lets someone point
//! the tool at a bulb variant that hands out a different address.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BULB_ADDRESS, DEFAULT_BULB_PORT};
use crate::errors::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Where the bulb lives
pub struct Settings {
    /// Bulb address on its own access point
    pub address: IpAddr,
    /// Bulb TLS port
    pub port: u16,
}

impl ::std::default::Default for Settings {
    /// The address and port every virgin bulb we know of uses
    fn default() -> Self {
        Settings {
            address: IpAddr::V4(DEFAULT_BULB_ADDRESS),
            port: DEFAULT_BULB_PORT,
        }
    }
}

impl Settings {
    /// Load from `path`, which must exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ConfigMissing(path.to_path_buf()));
        }
        debug!("Loading settings from {}", path.display());
        Ok(confy::load_path(path)?)
    }

    pub fn target(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}
