//! Polling driver, the hexagonal core.
//!
//! [`PollingDriver`] owns every channel's state for the life of the
//! process.  Each cycle runs the digital scan, then the analog scan, and
//! encodes every resulting event into one frame for the [`FrameSink`].
//!
//! ```text
//!  DigitalSource ──▶ ┌───────────────────────────┐
//!                    │       PollingDriver        │ ──▶ FrameSink
//!   AnalogSource ──▶ │ DigitalDetector · Analog…  │
//!                    └───────────────────────────┘
//! ```
//!
//! Single-threaded and synchronous: the only suspension point is the
//! fixed delay at the top of [`PollingDriver::step`].

use embedded_hal::delay::DelayNs;
use log::{info, trace};

use crate::config::SurfaceConfig;
use crate::detect::{AnalogDetector, DigitalDetector, ScanEvents};
use crate::pins::{BUTTON_COUNT, POT_COUNT};
use crate::protocol::value::ValueEncoding;

use super::ports::{AnalogSource, DigitalSource, FrameSink};

/// Frames produced by one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleStats {
    pub digital_events: usize,
    pub analog_events: usize,
}

impl CycleStats {
    pub fn total(&self) -> usize {
        self.digital_events + self.analog_events
    }
}

/// Driver sized for the board in [`crate::pins`].
pub type SurfaceDriver = PollingDriver<BUTTON_COUNT, POT_COUNT>;

/// Owns `D` digital and `A` analog channel states.
pub struct PollingDriver<const D: usize, const A: usize> {
    digital: DigitalDetector<D>,
    analog: AnalogDetector<A>,
    encoding: ValueEncoding,
    poll_period_ms: u32,
    cycles: u64,
    frames_sent: u64,
}

impl<const D: usize, const A: usize> PollingDriver<D, A> {
    /// Construct the driver with every channel in its boot state
    /// (buttons released, pots idle at zero).
    pub fn new(config: &SurfaceConfig) -> Self {
        Self {
            digital: DigitalDetector::new(),
            analog: AnalogDetector::from_config(config),
            encoding: config.value_encoding,
            poll_period_ms: config.poll_period_ms,
            cycles: 0,
            frames_sent: 0,
        }
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle without sleeping: digital scan, then analog scan.
    ///
    /// The `hw` parameter satisfies **both** input ports, which avoids a
    /// double mutable borrow when one adapter owns all the pins.
    pub fn cycle(
        &mut self,
        hw: &mut (impl DigitalSource + AnalogSource),
        sink: &mut impl FrameSink,
    ) -> CycleStats {
        self.cycles += 1;

        let digital = self.digital.scan(hw);
        self.emit(&digital, sink);

        let analog = self.analog.scan(hw);
        self.emit(&analog, sink);

        let stats = CycleStats {
            digital_events: digital.len(),
            analog_events: analog.len(),
        };
        if stats.total() > 0 {
            trace!(
                "cycle {}: {} button, {} pot frames",
                self.cycles, stats.digital_events, stats.analog_events
            );
        }
        stats
    }

    /// Sleep for one polling period, then run a cycle.
    pub fn step(
        &mut self,
        hw: &mut (impl DigitalSource + AnalogSource),
        sink: &mut impl FrameSink,
        delay: &mut impl DelayNs,
    ) -> CycleStats {
        delay.delay_ms(self.poll_period_ms);
        self.cycle(hw, sink)
    }

    /// Poll forever.  There is no exit path; the loop ends with a reset
    /// or power-off.
    pub fn run(
        &mut self,
        hw: &mut (impl DigitalSource + AnalogSource),
        sink: &mut impl FrameSink,
        delay: &mut impl DelayNs,
    ) -> ! {
        info!(
            "polling {} buttons, {} pots every {} ms",
            D, A, self.poll_period_ms
        );
        loop {
            self.step(hw, sink, delay);
        }
    }

    fn emit<const N: usize>(&mut self, events: &ScanEvents<N>, sink: &mut impl FrameSink) {
        for event in events {
            sink.send(&event.to_frame(self.encoding));
            self.frames_sent += 1;
        }
    }

    // ── Introspection ─────────────────────────────────────────

    /// Cycles run since boot.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Frames handed to the sink since boot (delivered or not).
    pub fn frames_sent(&self) -> u64 {
        self.frames_sent
    }

    pub fn digital(&self) -> &DigitalDetector<D> {
        &self.digital
    }

    pub fn analog(&self) -> &AnalogDetector<A> {
        &self.analog
    }

    pub fn encoding(&self) -> ValueEncoding {
        self.encoding
    }
}
