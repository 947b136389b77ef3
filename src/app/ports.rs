//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   DigitalSource ──▶ ┌───────────────┐
//!                     │ PollingDriver │ ──▶ FrameSink
//!    AnalogSource ──▶ └───────────────┘
//! ```
//!
//! Reads are infallible at this boundary: an adapter whose pin read fails
//! decides what level to report (and logs it).  The core never sees an
//! error from its inputs.

use crate::protocol::frame::Frame;

// ───────────────────────────────────────────────────────────────
// Input ports (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Boolean input channels, addressed by channel index.
pub trait DigitalSource {
    /// Current level of digital channel `index` (`true` = active).
    fn read_level(&mut self, index: usize) -> bool;
}

/// Raw ADC input channels, addressed by channel index.
pub trait AnalogSource {
    /// Current raw reading of analog channel `index`.
    fn read_raw(&mut self, index: usize) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → serial link)
// ───────────────────────────────────────────────────────────────

/// Receives every frame the driver produces, in emission order.
///
/// Implementations must not block on the receiver.  Whatever they do with
/// a frame they cannot deliver is their own policy; the driver never
/// retries.
pub trait FrameSink {
    fn send(&mut self, frame: &Frame);
}
