//! Application core: sampling and change reporting, zero I/O.
//!
//! The [`service::PollingDriver`] owns every channel's state and runs the
//! per-cycle digital then analog scan.  All interaction with hardware
//! happens through **port traits** defined in [`ports`], keeping this layer
//! fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
