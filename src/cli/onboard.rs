//! The onboarding command

use anyhow::{Context, Error};
use lifx_onboard::{InsecureTlsProfile, OnboardPacket, OnboardRequest, Settings, TlsTransport};
use log::{debug, info};

use super::prompt::confirm;
use super::Cli;

/// Confirm with the user and send the onboarding packet
pub fn onboard(cli: &Cli) -> Result<(), Error> {
    let request = OnboardRequest::new(&cli.ssid, &cli.password);

    if cli.dry_run {
        let packet = request.packet();
        println!("{}", hex::encode(packet.to_bytes()));
        return Ok(());
    }

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => Settings::default(),
    };
    let target = settings.target();
    info!("Bulb at {target}");

    // TLS is only set up inside send(), after the user said yes
    let mut transport = TlsTransport::new(target, InsecureTlsProfile::default());
    debug!("Will connect to {} once confirmed", transport.addr());

    let yes = cli.yes;
    lifx_onboard::run(
        &request,
        |packet: &OnboardPacket| {
            println!("Will attempt to onboard using");
            println!("  ssid: {}", String::from_utf8_lossy(packet.ssid()));
            println!("  password: {}", String::from_utf8_lossy(packet.psk()));
            if yes {
                return Ok(true);
            }
            confirm("Continue?")
        },
        &mut transport,
    )?;

    println!("LIFX bulb probably onboarded.  Best of luck ;-)");
    Ok(())
}
