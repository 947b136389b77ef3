//! Per-channel change detection.
//!
//! Each detector owns a fixed-size array of channel states, created once
//! at boot and mutated in place every polling cycle.  A scan reads every
//! channel in ascending index order and returns at most one event per
//! channel.

pub mod analog;
pub mod digital;

pub use analog::{AnalogChannel, AnalogDetector};
pub use digital::{DigitalChannel, DigitalDetector};

/// Events from one scan; never more than one per channel.
pub type ScanEvents<const N: usize> = heapless::Vec<crate::app::events::InputEvent, N>;
