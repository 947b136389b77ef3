//! Hardware adapter. Bridges the board's pins to the domain input ports.
//!
//! Owns nothing but the last good ADC reading per pot; the pins themselves
//! are configured once by [`hw_init`](crate::drivers::hw_init) and read
//! through its helpers.  On non-espidf targets those helpers read the
//! simulated levels instead.

use log::warn;

use crate::app::ports::{AnalogSource, DigitalSource};
use crate::drivers::hw_init;
use crate::pins::{BUTTON_GPIOS, POT_ADC1_CHANNELS, POT_COUNT};

/// Concrete adapter for the buttons and pots listed in [`crate::pins`].
pub struct HardwareAdapter {
    /// Substituted when a one-shot conversion fails, so a flaky read
    /// never looks like a knob movement.
    last_good: [u16; POT_COUNT],
    /// Full-scale reading; anything above is clamped.
    adc_max: u16,
    read_failures: u32,
}

impl HardwareAdapter {
    pub fn new(adc_max: u16) -> Self {
        Self {
            last_good: [0; POT_COUNT],
            adc_max,
            read_failures: 0,
        }
    }

    /// ADC conversions that failed since boot.
    pub fn read_failures(&self) -> u32 {
        self.read_failures
    }
}

// ── DigitalSource implementation ──────────────────────────────

impl DigitalSource for HardwareAdapter {
    fn read_level(&mut self, index: usize) -> bool {
        BUTTON_GPIOS
            .get(index)
            .is_some_and(|&gpio| hw_init::gpio_read(gpio))
    }
}

// ── AnalogSource implementation ───────────────────────────────

impl AnalogSource for HardwareAdapter {
    fn read_raw(&mut self, index: usize) -> u16 {
        let Some(&channel) = POT_ADC1_CHANNELS.get(index) else {
            return 0;
        };
        match hw_init::adc1_read(channel) {
            Some(raw) => {
                let raw = raw.min(self.adc_max);
                self.last_good[index] = raw;
                raw
            }
            None => {
                self.read_failures = self.read_failures.saturating_add(1);
                warn!(
                    "pot {} (ADC1_CH{}) read failed, holding {}",
                    index, channel, self.last_good[index]
                );
                self.last_good[index]
            }
        }
    }
}
