//! errors returned by our library and cli tool

use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
/// Onboarding errors: user refusal, TLS setup, connecting and sending
pub enum Error {
    #[error("Onboarding declined")]
    Declined,
    #[error("Unable to read confirmation: {0}")]
    Prompt(#[source] io::Error),
    #[error("Unknown security mode {0:#04x}")]
    UnknownSecurityMode(u8),
    #[error("Unable to build TLS configuration: {0}")]
    Tls(#[from] openssl::error::ErrorStack),
    #[error("Unable to connect to {addr}: {source}")]
    Connect { addr: String, source: io::Error },
    #[error("Unable to send onboarding packet: {0}")]
    Send(#[source] io::Error),
    #[error("Config file {} does not exist", .0.display())]
    ConfigMissing(PathBuf),
    #[error("Unable to load config file: {0}")]
    Config(#[from] confy::ConfyError),
}
