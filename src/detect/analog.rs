//! Threshold-triggered, decay-windowed detector for potentiometer channels.
//!
//! Reporting every ADC change floods the link with jitter; reporting once
//! per move under-samples a knob that keeps turning.  Instead a move larger
//! than the threshold opens a window of `idle_timeout` cycles during which
//! the channel reports its fresh reading every cycle.
//!
//! Per cycle, for reading `v`:
//!
//! 1. `|v - last_value| > threshold` → `decay = idle_timeout`,
//!    `last_value = v` (restarts a window that is already open).
//! 2. `decay > 1` → report `v`, `decay -= 1`.
//!
//! A single excursion therefore yields `idle_timeout - 1` reports.  Once
//! the window drains `decay` rests at 1 and the channel stays silent until
//! the next excursion; the baseline `last_value` only moves on excursions,
//! so slow drift accumulates until it crosses the threshold.

use log::debug;

use crate::app::events::InputEvent;
use crate::app::ports::AnalogSource;
use crate::config::SurfaceConfig;

use super::ScanEvents;

/// State of one analog channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalogChannel {
    /// Reading captured at the last threshold crossing.
    last_value: u16,
    /// Reports left in the current window, plus one.
    decay: u16,
}

impl AnalogChannel {
    pub const fn last_value(&self) -> u16 {
        self.last_value
    }

    pub const fn decay(&self) -> u16 {
        self.decay
    }

    /// Whether the next cycle reports even without a new excursion.
    pub const fn is_reporting(&self) -> bool {
        self.decay > 1
    }

    /// Apply one reading; returns the value to report, if any.
    pub fn update(&mut self, raw: u16, threshold: u16, idle_timeout: u16) -> Option<u16> {
        if raw.abs_diff(self.last_value) > threshold {
            if !self.is_reporting() {
                debug!("pot window opened at {} (was {})", raw, self.last_value);
            }
            self.decay = idle_timeout;
            self.last_value = raw;
        }

        if self.decay > 1 {
            self.decay -= 1;
            Some(raw)
        } else {
            None
        }
    }
}

/// Decay-window detector over `N` analog channels.
#[derive(Debug, Clone)]
pub struct AnalogDetector<const N: usize> {
    channels: [AnalogChannel; N],
    threshold: u16,
    idle_timeout: u16,
}

impl<const N: usize> AnalogDetector<N> {
    pub const fn new(threshold: u16, idle_timeout: u16) -> Self {
        const { assert!(N <= 256, "channel index must fit in one byte") };
        Self {
            channels: [AnalogChannel {
                last_value: 0,
                decay: 0,
            }; N],
            threshold,
            idle_timeout,
        }
    }

    pub fn from_config(config: &SurfaceConfig) -> Self {
        Self::new(config.analog_threshold, config.idle_timeout_cycles)
    }

    /// Read every channel once, in index order.
    pub fn scan(&mut self, source: &mut impl AnalogSource) -> ScanEvents<N> {
        let mut events = ScanEvents::new();
        for (i, ch) in self.channels.iter_mut().enumerate() {
            let raw = source.read_raw(i);
            if let Some(raw) = ch.update(raw, self.threshold, self.idle_timeout) {
                // Capacity is N and each channel pushes at most once.
                let _ = events.push(InputEvent::Pot {
                    index: i as u8,
                    raw,
                });
            }
        }
        events
    }

    pub fn channels(&self) -> &[AnalogChannel; N] {
        &self.channels
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn idle_timeout(&self) -> u16 {
        self.idle_timeout
    }
}
