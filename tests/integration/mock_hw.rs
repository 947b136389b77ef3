//! Mock adapters for integration tests.
//!
//! `MockSurface` holds the levels the next cycle will read; tests mutate
//! it between cycles.  `RecordingSink` keeps every frame the driver emits.

use ctlsurface::app::events::InputEvent;
use ctlsurface::app::ports::{AnalogSource, DigitalSource, FrameSink};
use ctlsurface::pins::{BUTTON_COUNT, POT_COUNT};
use ctlsurface::protocol::frame::Frame;
use ctlsurface::protocol::value::ValueEncoding;

// ── MockSurface ───────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockSurface {
    pub buttons: [bool; BUTTON_COUNT],
    pub pots: [u16; POT_COUNT],
    pub reads: usize,
}

impl DigitalSource for MockSurface {
    fn read_level(&mut self, index: usize) -> bool {
        self.reads += 1;
        self.buttons[index]
    }
}

impl AnalogSource for MockSurface {
    fn read_raw(&mut self, index: usize) -> u16 {
        self.reads += 1;
        self.pots[index]
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Frame>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames recorded since the last call.
    pub fn take(&mut self) -> Vec<Frame> {
        core::mem::take(&mut self.frames)
    }

    pub fn events(&self, encoding: ValueEncoding) -> Vec<InputEvent> {
        self.frames
            .iter()
            .map(|f| InputEvent::from_frame(f, encoding))
            .collect()
    }
}

impl FrameSink for RecordingSink {
    fn send(&mut self, frame: &Frame) {
        self.frames.push(*frame);
    }
}
