//! Transport abstraction for replication bytes.
//!
//! The only implementation here is `LocalLoopbackTransport`: in-proc bounded
//! channels pairing a client half with a server half. Real sockets would
//! implement the same trait.

use crate::channel;
use crate::frame;
use crate::snapshot::SnapshotEncode;

#[derive(Debug)]
pub enum TrySendError {
    Full,
    Disconnected,
}

/// Minimal transport trait for byte messages.
pub trait Transport: Send + Sync {
    fn try_send(&self, bytes: Vec<u8>) -> Result<(), TrySendError>;
    fn try_recv(&self) -> Option<Vec<u8>>;
    fn depth(&self) -> usize;
}

/// Encode, frame, and send one message. A full queue drops the message with
/// a log line; the client edge is lossy by design.
pub fn send_msg<T: Transport + ?Sized>(t: &T, msg: &impl SnapshotEncode) -> anyhow::Result<()> {
    let mut payload = Vec::new();
    msg.encode(&mut payload);
    let mut framed = Vec::with_capacity(payload.len() + 5);
    frame::write_msg(&mut framed, &payload)?;
    metrics::counter!("net.bytes_sent").increment(framed.len() as u64);
    match t.try_send(framed) {
        Ok(()) => Ok(()),
        Err(TrySendError::Full) => {
            metrics::counter!("net.send_dropped").increment(1);
            log::debug!("transport full; dropping outbound message");
            Ok(())
        }
        Err(TrySendError::Disconnected) => Err(anyhow::anyhow!("transport disconnected")),
    }
}

/// Drain every queued frame and return the unframed payloads. Frames that
/// fail validation are dropped individually with a warning.
pub fn recv_payloads<T: Transport + ?Sized>(t: &T) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    while let Some(bytes) = t.try_recv() {
        metrics::counter!("net.bytes_received").increment(bytes.len() as u64);
        match frame::read_msg(&bytes) {
            Ok(payload) => out.push(payload.to_vec()),
            Err(e) => log::warn!("dropping bad frame: {e:#}"),
        }
    }
    out
}

/// In-process loopback using bounded channels.
#[derive(Clone)]
pub struct LocalLoopbackTransport {
    tx: channel::Tx,
    rx: channel::Rx,
}

impl LocalLoopbackTransport {
    /// Build a connected pair: what one half sends, the other receives.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, Self) {
        let (tx_a, rx_a) = channel::channel_bounded(capacity);
        let (tx_b, rx_b) = channel::channel_bounded(capacity);
        let a = Self { tx: tx_a, rx: rx_b };
        let b = Self { tx: tx_b, rx: rx_a };
        (a, b)
    }
}

impl Transport for LocalLoopbackTransport {
    fn try_send(&self, bytes: Vec<u8>) -> Result<(), TrySendError> {
        if self.tx.try_send(bytes) {
            Ok(())
        } else {
            Err(TrySendError::Full)
        }
    }
    fn try_recv(&self) -> Option<Vec<u8>> {
        self.rx.try_recv()
    }
    fn depth(&self) -> usize {
        self.rx.depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ClientCmd;
    use crate::snapshot::SnapshotDecode;

    #[test]
    fn loopback_send_recv() {
        let (a, b) = LocalLoopbackTransport::new(2);
        a.try_send(b"ping".to_vec()).unwrap();
        b.try_send(b"pong".to_vec()).unwrap();
        assert_eq!(b.try_recv(), Some(b"ping".to_vec()));
        assert_eq!(a.try_recv(), Some(b"pong".to_vec()));
    }

    #[test]
    fn framed_message_survives_the_loop() {
        let (client, server) = LocalLoopbackTransport::new(4);
        let msg = ClientCmd::Move {
            pos: [1.0, 0.0, 2.0],
        };
        send_msg(&client, &msg).expect("send");
        let payloads = recv_payloads(&server);
        assert_eq!(payloads.len(), 1);
        let got = ClientCmd::decode(&mut &payloads[0][..]).expect("decode");
        assert_eq!(got, msg);
    }

    #[test]
    fn bad_frames_are_dropped_not_fatal() {
        let (client, server) = LocalLoopbackTransport::new(4);
        client.try_send(vec![9, 9, 9]).unwrap();
        send_msg(&client, &ClientCmd::Hello { token: "t".into() }).expect("send");
        let payloads = recv_payloads(&server);
        assert_eq!(payloads.len(), 1);
    }
}
