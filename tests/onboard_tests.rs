use lifx_onboard::constants::{ONBOARD_PACKET_SIZE, ONBOARD_PREAMBLE, PREAMBLE_SIZE};
use lifx_onboard::{OnboardPacket, SecurityMode, DEFAULT_SECURITY_MODE};
use std::io::Write;
use std::process::{Command, Stdio};

const SSID_RANGE: std::ops::Range<usize> = PREAMBLE_SIZE..PREAMBLE_SIZE + 32;
const PSK_RANGE: std::ops::Range<usize> = PREAMBLE_SIZE + 32..PREAMBLE_SIZE + 96;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lifx-onboard"));
    cmd.env_remove("LIFX_ONBOARD_YES")
        .env_remove("LIFX_ONBOARD_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn padded(value: &str, width: usize) -> Vec<u8> {
    let mut field = value.as_bytes().to_vec();
    field.resize(width, 0);
    field
}

/// The worked example: home / secret123
#[test]
fn test_home_secret123() {
    let bytes = OnboardPacket::new("home", "secret123").to_bytes();

    let mut expected = ONBOARD_PREAMBLE.to_vec();
    expected.extend_from_slice(b"home");
    expected.extend_from_slice(&[0u8; 28]);
    expected.extend_from_slice(b"secret123");
    expected.extend_from_slice(&[0u8; 55]);
    expected.push(0x05);

    assert_eq!(bytes.len(), 134);
    assert_eq!(&bytes[..], &expected[..]);
}

/// Short values are left-justified and zero padded
#[test]
fn test_short_fields_are_padded() {
    let cases = vec![
        ("", ""),
        ("a", "b"),
        ("my network", "correct horse battery staple"),
        (
            "exactly-thirty-two-bytes-long!!!",
            "sixty-four-bytes-sixty-four-bytes-sixty-four-bytes-sixty-four-by",
        ),
    ];

    for (ssid, psk) in cases {
        assert!(ssid.len() <= 32 && psk.len() <= 64);
        let bytes = OnboardPacket::new(ssid, psk).to_bytes();
        assert_eq!(bytes.len(), ONBOARD_PACKET_SIZE);
        assert_eq!(&bytes[SSID_RANGE], &padded(ssid, 32)[..]);
        assert_eq!(&bytes[PSK_RANGE], &padded(psk, 64)[..]);
    }
}

/// Long values keep only their first bytes
#[test]
fn test_long_fields_are_truncated() {
    let ssid = "0123456789abcdefghijklmnopqrstuvwxyzABCD";
    assert_eq!(ssid.len(), 40);
    let psk = "x".repeat(100);

    let bytes = OnboardPacket::new(ssid, &psk).to_bytes();
    assert_eq!(bytes.len(), ONBOARD_PACKET_SIZE);
    assert_eq!(&bytes[SSID_RANGE], &ssid.as_bytes()[..32]);
    assert!(bytes[SSID_RANGE].iter().all(|b| *b != 0));
    assert_eq!(&bytes[PSK_RANGE], &psk.as_bytes()[..64]);
}

/// Length never depends on the input
#[test]
fn test_length_is_constant() {
    for len in [0usize, 1, 31, 32, 33, 63, 64, 65, 500] {
        let value = "z".repeat(len);
        assert_eq!(OnboardPacket::new(&value, &value).to_bytes().len(), 134);
    }
}

#[test]
fn test_security_byte_is_wpa2_aes_psk() {
    assert_eq!(DEFAULT_SECURITY_MODE, SecurityMode::Wpa2AesPsk);
    let bytes = OnboardPacket::new("net", "pw").to_bytes();
    assert_eq!(bytes[ONBOARD_PACKET_SIZE - 1], 0x05);
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = bin().stdin(Stdio::null()).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_one_argument_is_usage_error() {
    let output = bin().arg("home").stdin(Stdio::null()).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_answering_no_sends_nothing() {
    let mut child = bin()
        .args(["home", "secret123"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"n\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ssid: home"));
    assert!(stdout.contains("password: secret123"));
    assert!(!stdout.contains("onboarded"));
}

#[test]
fn test_dry_run_prints_packet() {
    let output = bin()
        .args(["--dry-run", "home", "secret123"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(output.status.success());
    let hex = String::from_utf8_lossy(&output.stdout).trim().to_string();
    assert_eq!(hex.len(), ONBOARD_PACKET_SIZE * 2);
    assert!(hex.starts_with("86000034"));
    assert!(hex.ends_with("05"));
}
