//! Bounded in-proc byte channels with non-blocking helpers.
//!
//! Bounded on purpose: the client edge is lossy under backpressure, and a
//! stalled peer must never grow an unbounded queue.

use crossbeam_channel::{Receiver, Sender, bounded};

#[derive(Clone)]
pub struct Tx(Sender<Vec<u8>>);

#[derive(Clone)]
pub struct Rx(Receiver<Vec<u8>>);

/// Create a bounded sender/receiver pair.
#[must_use]
pub fn channel_bounded(capacity: usize) -> (Tx, Rx) {
    let (s, r) = bounded::<Vec<u8>>(capacity);
    (Tx(s), Rx(r))
}

impl Tx {
    /// Try to send; returns false when the queue is full or the receiver is
    /// gone.
    #[must_use]
    pub fn try_send(&self, bytes: Vec<u8>) -> bool {
        self.0.try_send(bytes).is_ok()
    }
}

impl Rx {
    /// Non-blocking receive of a single message.
    #[must_use]
    pub fn try_recv(&self) -> Option<Vec<u8>> {
        self.0.try_recv().ok()
    }

    /// Drain all currently queued messages.
    #[must_use]
    pub fn drain(&self) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        while let Some(b) = self.try_recv() {
            out.push(b);
        }
        out
    }

    /// Messages currently queued.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}
