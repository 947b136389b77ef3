//! Unified error types for the control-surface firmware.
//!
//! The sampling core has no recoverable error taxonomy: pin reads always
//! produce a value.  [`Error`] covers boot-time failures (bad config,
//! peripheral init).  The two edges of the wire keep their own types:
//! [`TransportError`] stays inside the fire-and-forget frame sink and
//! [`FrameError`] is returned by host-side frame validation.  All variants
//! are `Copy` so they pass through the polling loop without allocation.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
    /// Peripheral initialisation failed.
    Init(HwInitError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(e) => write!(f, "init: {e}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The driver returned a negative status code.
    WriteFailed(i32),
    /// Fewer bytes than the full frame were accepted.
    ShortWrite { written: usize, expected: usize },
    /// The transport has not been initialised.
    NotReady,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed(rc) => write!(f, "write failed (rc={rc})"),
            Self::ShortWrite { written, expected } => {
                write!(f, "short write ({written}/{expected} bytes)")
            }
            Self::NotReady => write!(f, "transport not ready"),
        }
    }
}

impl core::error::Error for TransportError {}

// ---------------------------------------------------------------------------
// Frame validation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Byte 0 is not one of the known command letters.
    UnknownCommand(u8),
    /// Byte 4 does not equal the wrapping sum of bytes 0..4.
    ChecksumMismatch { expected: u8, actual: u8 },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand(b) => write!(f, "unknown command byte 0x{b:02x}"),
            Self::ChecksumMismatch { expected, actual } => write!(
                f,
                "checksum mismatch (expected 0x{expected:02x}, got 0x{actual:02x})"
            ),
        }
    }
}

impl core::error::Error for FrameError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
