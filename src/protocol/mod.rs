//! Device → host wire protocol.
//!
//! Fixed five-byte frames with an additive checksum and no delimiters.
//!
//! ```text
//! ┌─────────┬───────┬───────┬───────┬──────────┐
//! │ command │ index │ data1 │ data2 │ checksum │
//! │ 'B'/'P' │  u8   │  u8   │  u8   │ Σ mod 256│
//! └─────────┴───────┴───────┴───────┴──────────┘
//! ```
//!
//! The device side only encodes ([`frame`], [`value`]) and writes through a
//! [`transport::Transport`].  The [`decoder`] is for the host side and for
//! tests: it recovers frame boundaries by checksum scanning after a byte is
//! lost on the link.

pub mod decoder;
pub mod frame;
pub mod transport;
pub mod value;

pub use frame::{Command, FRAME_LEN, Frame};
pub use value::ValueEncoding;
