//! `embedded-hal` pin adapter.
//!
//! Any board support crate that hands out `embedded_hal::digital::InputPin`
//! implementations can feed the driver through [`HalDigitalInputs`]
//! without going through the raw-register helpers.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::app::ports::DigitalSource;

/// [`DigitalSource`] over `N` owned input pins, indexed by position.
pub struct HalDigitalInputs<P: InputPin, const N: usize> {
    pins: [P; N],
    /// Active-low wiring (pull-up, switch to ground) reads inverted.
    active_low: bool,
}

impl<P: InputPin, const N: usize> HalDigitalInputs<P, N> {
    /// Pins that read HIGH when the button is pressed.
    pub fn active_high(pins: [P; N]) -> Self {
        Self {
            pins,
            active_low: false,
        }
    }

    /// Pins that read LOW when the button is pressed.
    pub fn active_low(pins: [P; N]) -> Self {
        Self {
            pins,
            active_low: true,
        }
    }

    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: InputPin, const N: usize> DigitalSource for HalDigitalInputs<P, N> {
    fn read_level(&mut self, index: usize) -> bool {
        let Some(pin) = self.pins.get_mut(index) else {
            return false;
        };
        match pin.is_high() {
            Ok(high) => high != self.active_low,
            Err(e) => {
                warn!("button {} read failed ({:?}), treating as released", index, e);
                false
            }
        }
    }
}
