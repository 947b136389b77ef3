//! System configuration parameters
//!
//! All tunable parameters for the sampling loop and the wire encoding.
//! Defaults match the reference control surface; a build can override any
//! subset through a JSON document (see [`SurfaceConfig::from_json`]).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::protocol::value::ValueEncoding;

/// Core sampling configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    // --- Timing ---
    /// Delay before each polling cycle (milliseconds)
    pub poll_period_ms: u32,

    // --- Analog change detection ---
    /// Raw-count difference that must be exceeded to open a report window
    pub analog_threshold: u16,
    /// Length of a report window in polling cycles
    pub idle_timeout_cycles: u16,
    /// ADC resolution in bits
    pub adc_resolution_bits: u8,

    // --- Wire ---
    /// How analog readings are split into the two data bytes
    pub value_encoding: ValueEncoding,
    /// Host UART baud rate
    pub uart_baud: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            // Timing
            poll_period_ms: 100, // 10 Hz

            // Analog
            analog_threshold: 10,
            idle_timeout_cycles: 100, // 10 s at 10 Hz
            adc_resolution_bits: 12,

            // Wire
            value_encoding: ValueEncoding::NibbleSplit,
            uart_baud: 115_200,
        }
    }
}

impl SurfaceConfig {
    /// Full-scale raw ADC value for the configured resolution.
    pub fn adc_max(&self) -> u16 {
        let bits = u32::from(self.adc_resolution_bits.clamp(1, 16));
        ((1u32 << bits) - 1) as u16
    }

    /// Reject configurations the sampler cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.poll_period_ms == 0 {
            return Err(Error::Config("poll_period_ms must be > 0"));
        }
        // decay only reports while above 1, so a 1-cycle window is silent.
        if self.idle_timeout_cycles < 2 {
            return Err(Error::Config("idle_timeout_cycles must be >= 2"));
        }
        if !(1..=16).contains(&self.adc_resolution_bits) {
            return Err(Error::Config("adc_resolution_bits must be within 1..=16"));
        }
        if self.adc_resolution_bits > self.value_encoding.max_lossless_bits() {
            return Err(Error::Config(
                "value_encoding cannot carry the configured ADC resolution",
            ));
        }
        if self.analog_threshold >= self.adc_max() {
            return Err(Error::Config("analog_threshold must be below ADC full scale"));
        }
        if self.uart_baud == 0 {
            return Err(Error::Config("uart_baud must be > 0"));
        }
        Ok(())
    }

    /// Parse a JSON override on top of the defaults, then validate it.
    ///
    /// Missing fields keep their default value, so `{"poll_period_ms": 20}`
    /// is a complete override.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON override"))?;
        config.validate()?;
        Ok(config)
    }
}
