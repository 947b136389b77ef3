//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements                   | Connects to             |
//! |---------------|------------------------------|-------------------------|
//! | `hardware`    | DigitalSource, AnalogSource  | ESP32 GPIO, ADC1        |
//! | `hal_pins`    | DigitalSource                | any `embedded-hal` pin  |
//! | `uart`        | Transport                    | host UART               |
//! | `log_sink`    | FrameSink (decorator)        | serial log output       |

pub mod hal_pins;
pub mod hardware;
pub mod log_sink;
pub mod uart;
