//! Edge detector for button channels.
//!
//! No debounce: every raw transition seen at poll time is reported once.
//! Channels start from an explicit "released" level, so a button already
//! held at boot reports its press on the first cycle.

use log::debug;

use crate::app::events::InputEvent;
use crate::app::ports::DigitalSource;

use super::ScanEvents;

/// State of one digital channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitalChannel {
    /// Level carried by the last frame sent for this channel.
    last_reported: bool,
}

impl DigitalChannel {
    pub const fn new(initial: bool) -> Self {
        Self {
            last_reported: initial,
        }
    }

    pub const fn last_reported(&self) -> bool {
        self.last_reported
    }

    /// Record `level`; returns it when it differs from the last report.
    pub fn update(&mut self, level: bool) -> Option<bool> {
        if level == self.last_reported {
            return None;
        }
        self.last_reported = level;
        Some(level)
    }
}

/// Edge detector over `N` digital channels.
#[derive(Debug, Clone)]
pub struct DigitalDetector<const N: usize> {
    channels: [DigitalChannel; N],
}

impl<const N: usize> DigitalDetector<N> {
    /// All channels seeded as released.
    pub const fn new() -> Self {
        Self::with_initial([false; N])
    }

    /// Seed each channel with an explicit starting level.
    pub const fn with_initial(levels: [bool; N]) -> Self {
        const { assert!(N <= 256, "channel index must fit in one byte") };
        let mut channels = [DigitalChannel::new(false); N];
        let mut i = 0;
        while i < N {
            channels[i] = DigitalChannel::new(levels[i]);
            i += 1;
        }
        Self { channels }
    }

    /// Read every channel once, in index order.
    pub fn scan(&mut self, source: &mut impl DigitalSource) -> ScanEvents<N> {
        let mut events = ScanEvents::new();
        for (i, ch) in self.channels.iter_mut().enumerate() {
            if let Some(pressed) = ch.update(source.read_level(i)) {
                debug!("button {} -> {}", i, if pressed { "pressed" } else { "released" });
                // Capacity is N and each channel pushes at most once.
                let _ = events.push(InputEvent::Button {
                    index: i as u8,
                    pressed,
                });
            }
        }
        events
    }

    pub fn channels(&self) -> &[DigitalChannel; N] {
        &self.channels
    }
}

impl<const N: usize> Default for DigitalDetector<N> {
    fn default() -> Self {
        Self::new()
    }
}
