//! The `record` binary stops on SIGINT and writes what it captured

use std::io::{BufRead, BufReader};
use std::net::{SocketAddr, UdpSocket};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use rosc::{encoder, OscMessage, OscPacket, OscType};
use tempfile::TempDir;

use crate::helpers::isolated_config;

const TIMEOUT: Duration = Duration::from_secs(10);

/// Port from "Recording /a on 0.0.0.0:PORT to ...".
fn announced_port(line: &str) -> u16 {
    let addr = line
        .split(" on ")
        .nth(1)
        .and_then(|rest| rest.split(" to ").next())
        .unwrap_or_else(|| panic!("Unexpected banner: {line}"));
    addr.rsplit(':').next().unwrap().parse().unwrap()
}

#[test]
fn sigint_flushes_pending_messages_and_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("rec.xml");

    let mut child = Command::new(env!("CARGO_BIN_EXE_oscrec"))
        .args(["record", "0"])
        .arg(&output)
        .arg("/a")
        .env("OSCREC_CONFIG", isolated_config())
        .env_remove("OSCREC_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut banner = String::new();
    stdout.read_line(&mut banner).unwrap();
    let target = SocketAddr::from(([127, 0, 0, 1], announced_port(&banner)));

    let sender = UdpSocket::bind("127.0.0.1:0").unwrap();
    for value in 0..3 {
        let packet = OscPacket::Message(OscMessage {
            addr: "/a".to_string(),
            args: vec![OscType::Int(value)],
        });
        sender
            .send_to(&encoder::encode(&packet).unwrap(), target)
            .unwrap();
    }
    thread::sleep(Duration::from_millis(500));
    // Below the default flush interval, so nothing is on disk yet.
    assert!(!output.exists());

    let rc = unsafe { libc::kill(child.id() as libc::pid_t, libc::SIGINT) };
    assert_eq!(rc, 0);

    let deadline = Instant::now() + TIMEOUT;
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            panic!("record did not stop after SIGINT");
        }
        thread::sleep(Duration::from_millis(20));
    };

    let mut summary = String::new();
    stdout.read_line(&mut summary).unwrap();

    assert!(status.success(), "exit status: {status}");
    assert!(summary.starts_with("Captured 3 message(s)"), "{summary}");
    let doc = std::fs::read_to_string(&output).unwrap();
    assert_eq!(doc.matches("<message ").count(), 3);
}
