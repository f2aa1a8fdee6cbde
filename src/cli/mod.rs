//! CLI module for the onboarding tool
//!
//! Argument parsing, the confirmation prompt and logging setup.

pub mod onboard;
pub mod prompt;

use clap::Parser;
use env_logger::Env;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = lifx_onboard::constants::LONG_ABOUT)]
/// Our command-line interface
pub struct Cli {
    /// Network name the bulb should join (first 32 bytes are used)
    pub ssid: String,
    /// Network password (first 64 bytes are used)
    pub password: String,
    /// Don't ask before sending
    #[arg(short, long, env = "LIFX_ONBOARD_YES")]
    pub yes: bool,
    /// Print the packet as hex instead of sending it
    #[arg(long)]
    pub dry_run: bool,
    /// Config file overriding the bulb's address and port
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LIFX_ONBOARD_CONFIG")]
    pub config: Option<std::path::PathBuf>,
    /// More log output; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Set up env_logger; `RUST_LOG` wins over `-v`
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
