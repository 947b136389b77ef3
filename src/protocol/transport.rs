//! Transport abstraction: any byte-oriented output channel.
//!
//! Concrete implementations:
//! - UART (see [`crate::adapters::uart::UartTransport`])
//!
//! [`TransportSink`] turns a transport into a [`FrameSink`] for the polling
//! driver.  The link is fire-and-forget: a frame the transport does not
//! accept in full is counted and dropped, never retried.

use log::{trace, warn};

use crate::app::ports::FrameSink;
use crate::error::TransportError;

use super::frame::{FRAME_LEN, Frame};

/// Byte-oriented output channel.
pub trait Transport {
    /// Error type for this transport.
    type Error: core::fmt::Debug;

    /// Write `data` to the transport without blocking on the receiver.
    /// Returns the number of bytes actually accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;
}

/// [`FrameSink`] that writes each frame as one five-byte transport write.
pub struct TransportSink<T: Transport> {
    transport: T,
    sent: u64,
    dropped: u64,
}

impl<T: Transport> TransportSink<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            sent: 0,
            dropped: 0,
        }
    }

    /// Frames fully accepted by the transport.
    pub fn sent(&self) -> u64 {
        self.sent
    }

    /// Frames lost to short writes or transport errors.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

impl<T: Transport> FrameSink for TransportSink<T> {
    fn send(&mut self, frame: &Frame) {
        let bytes = frame.to_bytes();
        match self.transport.write(&bytes) {
            Ok(n) if n == FRAME_LEN => {
                self.sent += 1;
                trace!("tx {:02x?}", bytes);
            }
            Ok(n) => {
                self.dropped += 1;
                let e = TransportError::ShortWrite {
                    written: n,
                    expected: FRAME_LEN,
                };
                warn!("tx {}, frame dropped (total dropped={})", e, self.dropped);
            }
            Err(e) => {
                self.dropped += 1;
                warn!(
                    "tx error {:?}, frame dropped (total dropped={})",
                    e, self.dropped
                );
            }
        }
    }
}
