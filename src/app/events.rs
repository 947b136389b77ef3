//! Reportable input events.
//!
//! The detectors produce these; the driver encodes each one into exactly
//! one [`Frame`].  The host-side decoder maps frames back.

use crate::protocol::frame::{Command, Frame};
use crate::protocol::value::ValueEncoding;

/// One reportable change on one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A digital channel changed level.
    Button { index: u8, pressed: bool },
    /// An analog channel reported inside its activity window.
    Pot { index: u8, raw: u16 },
}

impl InputEvent {
    pub fn index(&self) -> u8 {
        match *self {
            Self::Button { index, .. } | Self::Pot { index, .. } => index,
        }
    }

    pub fn to_frame(self, encoding: ValueEncoding) -> Frame {
        match self {
            Self::Button { index, pressed } => Frame::button(index, pressed),
            Self::Pot { index, raw } => Frame::pot(index, raw, encoding),
        }
    }

    /// Interpret a received frame.  Any non-zero `data1` on a button frame
    /// reads as pressed.
    pub fn from_frame(frame: &Frame, encoding: ValueEncoding) -> Self {
        match frame.command() {
            Command::Button => Self::Button {
                index: frame.index(),
                pressed: frame.data1() != 0,
            },
            Command::Pot => Self::Pot {
                index: frame.index(),
                raw: encoding.decode(frame.data1(), frame.data2()),
            },
        }
    }
}
