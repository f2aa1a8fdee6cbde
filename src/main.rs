//! lifx-onboard - put a virgin LIFX bulb on your WiFi
use std::process::ExitCode;

use clap::Parser;
use lifx_onboard::Error;

mod cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbose);
    match cli::onboard::onboard(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(Error::Declined) = e.downcast_ref::<Error>() {
                return ExitCode::FAILURE;
            }
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
