//! End-to-end capture over UDP

use std::net::{SocketAddr, UdpSocket};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rosc::{encoder, OscMessage, OscPacket, OscType};
use tempfile::TempDir;

use oscrec::capture::{Recorder, RecorderOptions};

use crate::helpers::wait_for;

const TIMEOUT: Duration = Duration::from_secs(5);

fn send(socket: &UdpSocket, target: SocketAddr, addr: &str, value: i32) {
    let packet = OscPacket::Message(OscMessage {
        addr: addr.to_string(),
        args: vec![OscType::Int(value)],
    });
    let bytes = encoder::encode(&packet).unwrap();
    socket.send_to(&bytes, target).unwrap();
}

fn flushed_count(path: &Path) -> usize {
    std::fs::read_to_string(path)
        .map(|doc| doc.matches("<message ").count())
        .unwrap_or(0)
}

#[test]
fn records_over_udp_with_interval_flushes() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("rec.xml");

    let options = RecorderOptions::new(&output, ["/a/b"]).with_flush_interval(5);
    let session = Recorder::listen(options, 0).unwrap();
    let target = SocketAddr::from(([127, 0, 0, 1], session.local_addr().port()));

    let stop = Arc::new(AtomicBool::new(false));
    let worker = {
        let stop = Arc::clone(&stop);
        thread::spawn(move || session.run_until(&stop))
    };

    let sender = UdpSocket::bind("127.0.0.1:0").unwrap();
    send(&sender, target, "/a", 100);
    send(&sender, target, "/a/b/c", 100);
    for value in 0..5 {
        send(&sender, target, "/a/b", value);
    }
    assert!(
        wait_for(TIMEOUT, || flushed_count(&output) == 5),
        "first flush never happened"
    );

    for value in 5..8 {
        send(&sender, target, "/a/b", value);
    }
    thread::sleep(Duration::from_millis(300));
    assert_eq!(flushed_count(&output), 5);

    stop.store(true, Ordering::SeqCst);
    let recorder = worker.join().unwrap().unwrap();

    let values: Vec<i64> = recorder.store().iter().map(|r| r.value).collect();
    assert_eq!(values, (0..8).collect::<Vec<i64>>());
    assert!(recorder.store().iter().all(|r| r.channel == "/a/b"));
    assert_eq!(flushed_count(&output), 8);
}
