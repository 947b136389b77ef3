//! Resynchronising frame decoder (host side).
//!
//! Frames carry no delimiter, so one lost or corrupted byte shifts every
//! later boundary.  The decoder keeps a sliding window of the last
//! [`FRAME_LEN`] bytes; whenever the window holds a known command byte and
//! a matching checksum it yields a frame and starts a fresh window,
//! otherwise the oldest byte is discarded on the next push.
//!
//! A misaligned window can match by chance, roughly once per 128 attempts
//! (two valid command letters × one checksum value in 256).  Consumers that
//! need stronger guarantees should require several consecutive aligned
//! frames before trusting the stream.

use heapless::Deque;
use log::trace;

use super::frame::{FRAME_LEN, Frame};

/// Streaming frame decoder.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    window: Deque<u8, FRAME_LEN>,
    skipped: u64,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one received byte.
    ///
    /// Returns `Some(frame)` when the last five bytes form a valid frame.
    pub fn push(&mut self, byte: u8) -> Option<Frame> {
        if self.window.is_full() && self.window.pop_front().is_some() {
            self.skipped += 1;
        }
        // Cannot fail: the window had at least one free slot after the pop.
        let _ = self.window.push_back(byte);

        if !self.window.is_full() {
            return None;
        }

        let mut bytes = [0u8; FRAME_LEN];
        for (slot, b) in bytes.iter_mut().zip(self.window.iter()) {
            *slot = *b;
        }

        match Frame::from_bytes(bytes) {
            Ok(frame) => {
                self.window.clear();
                Some(frame)
            }
            Err(e) => {
                trace!("decoder: window {:02x?} rejected ({})", bytes, e);
                None
            }
        }
    }

    /// Push a chunk of bytes and collect every frame found in it.
    pub fn feed(&mut self, data: &[u8]) -> Vec<Frame> {
        data.iter().filter_map(|&b| self.push(b)).collect()
    }

    /// Bytes discarded while hunting for a frame boundary.
    pub fn skipped_bytes(&self) -> u64 {
        self.skipped
    }

    /// Bytes buffered towards the next frame.
    pub fn pending(&self) -> usize {
        self.window.len()
    }

    /// Drop any partial frame (e.g. after the port is reopened).
    pub fn reset(&mut self) {
        self.window.clear();
    }
}
