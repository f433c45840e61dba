//! OSC over UDP
//!
//! A dedicated receiver thread reads datagrams, decodes them with `rosc`
//! and forwards every contained message, in packet order, over an mpsc
//! channel. The channel has a single consumer, so everything downstream
//! sees inbound messages one at a time without extra locking.

use std::io;
use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rosc::{OscMessage, OscPacket, OscType};

/// Largest payload a UDP datagram can carry over IPv4.
const MAX_DATAGRAM: usize = 65_507;

/// Socket read timeout; bounds how long a stop request goes unnoticed.
const RECV_TIMEOUT: Duration = Duration::from_millis(100);

/// Pause after a failed receive before trying again.
const RECV_ERROR_BACKOFF: Duration = Duration::from_millis(250);

/// Errors from the OSC transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to listen on UDP port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("Failed to configure UDP socket: {0}")]
    Socket(#[source] io::Error),

    #[error("Failed to start receiver thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("Malformed OSC packet: {0:?}")]
    Decode(rosc::OscError),
}

/// A bound OSC listener that has not started receiving yet.
#[derive(Debug)]
pub struct OscListener {
    socket: UdpSocket,
}

impl OscListener {
    /// Listen on `port` on all IPv4 interfaces. Port 0 picks a free port.
    pub fn bind(port: u16) -> Result<Self, TransportError> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, port))
            .map_err(|source| TransportError::Bind { port, source })?;
        Ok(Self { socket })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Start the receiver thread.
    ///
    /// The thread runs until [`Receiver::shutdown`] is called, the handle is
    /// dropped, or sending on `tx` fails because the consumer is gone.
    pub fn spawn(self, tx: Sender<OscMessage>) -> Result<Receiver, TransportError> {
        self.socket
            .set_read_timeout(Some(RECV_TIMEOUT))
            .map_err(TransportError::Socket)?;

        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let thread = thread::Builder::new()
            .name("osc-receiver".to_string())
            .spawn(move || receive_loop(self.socket, tx, &thread_stop))
            .map_err(TransportError::Spawn)?;

        Ok(Receiver {
            stop,
            thread: Some(thread),
        })
    }
}

/// Handle to a running receiver thread.
#[derive(Debug)]
pub struct Receiver {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl Receiver {
    /// Stop the receiver thread and wait for it to exit.
    pub fn shutdown(mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("OSC receiver thread panicked");
            }
        }
    }
}

impl Drop for Receiver {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

/// What the receive loop does after `recv_from` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecvFailure {
    /// Read timeout elapsed with nothing to read
    Idle,
    /// Real socket error; wait before retrying
    Backoff,
}

fn classify_recv_error(error: &io::Error) -> RecvFailure {
    match error.kind() {
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut | io::ErrorKind::Interrupted => {
            RecvFailure::Idle
        }
        _ => RecvFailure::Backoff,
    }
}

fn receive_loop(socket: UdpSocket, tx: Sender<OscMessage>, stop: &AtomicBool) {
    let mut buf = vec![0u8; MAX_DATAGRAM];
    while !stop.load(Ordering::SeqCst) {
        let (size, peer) = match socket.recv_from(&mut buf) {
            Ok(received) => received,
            Err(e) => {
                if classify_recv_error(&e) == RecvFailure::Backoff {
                    tracing::warn!(error = %e, "UDP receive failed");
                    thread::sleep(RECV_ERROR_BACKOFF);
                }
                continue;
            }
        };

        let messages = match decode_packet(&buf[..size]) {
            Ok(messages) => messages,
            Err(e) => {
                tracing::warn!(%peer, error = %e, "Dropping undecodable datagram");
                continue;
            }
        };

        for message in messages {
            if tx.send(message).is_err() {
                tracing::debug!("Message consumer gone, stopping receiver");
                return;
            }
        }
    }
    tracing::debug!("OSC receiver stopped");
}

/// Decode one datagram into its messages, flattening nested bundles.
pub fn decode_packet(bytes: &[u8]) -> Result<Vec<OscMessage>, TransportError> {
    let (_rest, packet) = rosc::decoder::decode_udp(bytes).map_err(TransportError::Decode)?;
    let mut messages = Vec::new();
    flatten(packet, &mut messages);
    Ok(messages)
}

fn flatten(packet: OscPacket, out: &mut Vec<OscMessage>) {
    match packet {
        OscPacket::Message(message) => out.push(message),
        OscPacket::Bundle(bundle) => {
            for inner in bundle.content {
                flatten(inner, out);
            }
        }
    }
}

/// Integer value of the first argument.
///
/// Floats are truncated toward zero, booleans become 1/0 and chars their
/// code point. Anything else (or no argument at all) has no integer value.
pub fn first_int(args: &[OscType]) -> Option<i64> {
    match args.first()? {
        OscType::Int(v) => Some(i64::from(*v)),
        OscType::Long(v) => Some(*v),
        OscType::Float(v) if v.is_finite() => Some(*v as i64),
        OscType::Double(v) if v.is_finite() => Some(*v as i64),
        OscType::Bool(v) => Some(i64::from(*v)),
        OscType::Char(c) => Some(i64::from(u32::from(*c))),
        _ => None,
    }
}
