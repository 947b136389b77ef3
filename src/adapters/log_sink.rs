//! Logging frame sink decorator.
//!
//! Wraps any [`FrameSink`] and writes each outgoing frame to the log as a
//! decoded [`InputEvent`] before forwarding it.  Useful on the bench, where
//! the serial console shows what the host should be seeing.

use log::debug;

use crate::app::events::InputEvent;
use crate::app::ports::FrameSink;
use crate::protocol::frame::Frame;
use crate::protocol::value::ValueEncoding;

/// Adapter that logs every [`Frame`] and passes it on unchanged.
pub struct LoggingSink<S: FrameSink> {
    inner: S,
    encoding: ValueEncoding,
}

impl<S: FrameSink> LoggingSink<S> {
    pub fn new(inner: S, encoding: ValueEncoding) -> Self {
        Self { inner, encoding }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: FrameSink> FrameSink for LoggingSink<S> {
    fn send(&mut self, frame: &Frame) {
        match InputEvent::from_frame(frame, self.encoding) {
            InputEvent::Button { index, pressed } => {
                debug!(
                    "BTN  | #{} {}",
                    index,
                    if pressed { "pressed" } else { "released" }
                );
            }
            InputEvent::Pot { index, raw } => {
                debug!("POT  | #{} raw={}", index, raw);
            }
        }
        self.inner.send(frame);
    }
}
