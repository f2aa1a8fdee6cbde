//! One-shot TLS sender
//!
//! Virgin bulbs speak TLS on port 56700 with a small, dated stack and a
//! self-signed certificate. Everything we relax to talk to them lives in
//! [`InsecureTlsProfile`]; nothing else in the crate touches TLS settings.

use std::io::{self, Write};
use std::net::{SocketAddr, TcpStream};

use log::{debug, info, warn};
use openssl::ssl::{
    SslConnector, SslConnectorBuilder, SslMethod, SslOptions, SslVerifyMode, SslVersion,
};

use crate::errors::Error;

/// Cipher list offered to the bulb. Security level 0, static RSA and CBC included.
pub const LEGACY_CIPHER_LIST: &str = "@SECLEVEL=0:TLS13-AES-256-GCM-SHA384:TLS13-CHACHA20-POLY1305-SHA256:TLS13-AES-128-GCM-SHA256:ECDH+AESGCM:ECDH+CHACHA20:DH+AESGCM:DH+CHACHA20:ECDH+AES256:DH+AES256:ECDH+AES128:DH+AES:ECDH+HIGH:DH+HIGH:RSA+AESGCM:RSA+AES:RSA+HIGH:!aNULL:!eNULL:!MD5:!3DES";

/// Something that can deliver one frame to the bulb
pub trait Transport {
    /// Send `frame` as a single write. No reply is read.
    fn send(&mut self, frame: &[u8]) -> Result<(), Error>;
}

/// INSECURE: TLS settings for a factory-fresh bulb.
///
/// - TLS 1.0 and up are allowed
/// - the cipher list drops to security level 0 and keeps static RSA and CBC suites
/// - the server certificate and name are never checked
/// - legacy (unsafe) renegotiation servers are accepted
#[derive(Clone)]
pub struct InsecureTlsProfile {
    /// Oldest protocol version we will negotiate
    pub min_version: SslVersion,
    /// OpenSSL cipher list string
    pub cipher_list: &'static str,
    /// Check the server certificate chain
    pub verify_peer: bool,
    /// Check the server certificate matches the address
    pub verify_hostname: bool,
    /// Talk to servers without RFC 5746 secure renegotiation
    pub legacy_server_connect: bool,
}

impl Default for InsecureTlsProfile {
    fn default() -> Self {
        Self {
            min_version: SslVersion::TLS1,
            cipher_list: LEGACY_CIPHER_LIST,
            verify_peer: false,
            verify_hostname: false,
            legacy_server_connect: true,
        }
    }
}

impl InsecureTlsProfile {
    /// OpenSSL connector builder with the profile applied
    pub fn connector_builder(&self) -> Result<SslConnectorBuilder, Error> {
        let mut builder = SslConnector::builder(SslMethod::tls_client())?;
        builder.set_min_proto_version(Some(self.min_version))?;
        builder.set_cipher_list(self.cipher_list)?;
        if !self.verify_peer {
            builder.set_verify(SslVerifyMode::NONE);
        }
        if self.legacy_server_connect {
            builder.set_options(SslOptions::from_bits_retain(0x4));
        }
        Ok(builder)
    }

    pub fn connector(&self) -> Result<SslConnector, Error> {
        Ok(self.connector_builder()?.build())
    }
}

/// TLS over TCP to a bulb
pub struct TlsTransport {
    addr: SocketAddr,
    profile: InsecureTlsProfile,
}

impl TlsTransport {
    /// Transport to `addr` using `profile`. Nothing is set up until [`Transport::send`].
    pub fn new(addr: SocketAddr, profile: InsecureTlsProfile) -> Self {
        Self { addr, profile }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn connect_error(&self, source: io::Error) -> Error {
        Error::Connect {
            addr: self.addr.to_string(),
            source,
        }
    }
}

impl Transport for TlsTransport {
    fn send(&mut self, frame: &[u8]) -> Result<(), Error> {
        let connector = self.profile.connector()?;
        let mut config = connector.configure()?;
        config.set_verify_hostname(self.profile.verify_hostname);
        config.set_use_server_name_indication(false);

        debug!("Connecting to {}", self.addr);
        let sock = TcpStream::connect(self.addr).map_err(|e| self.connect_error(e))?;
        let mut stream = config
            .connect(&self.addr.ip().to_string(), sock)
            .map_err(|e| self.connect_error(io::Error::new(io::ErrorKind::Other, e.to_string())))?;
        debug!(
            "TLS established: {} {}",
            stream.ssl().version_str(),
            stream.ssl().current_cipher().map(|c| c.name()).unwrap_or("?")
        );

        stream.write_all(frame).map_err(Error::Send)?;
        stream.flush().map_err(Error::Send)?;
        info!("Sent {} bytes to {}", frame.len(), self.addr);

        // The frame is out; a bulb that hangs up first is not a failure
        if let Err(e) = stream.shutdown() {
            warn!("Error while closing connection: {e}");
        }
        Ok(())
    }
}
