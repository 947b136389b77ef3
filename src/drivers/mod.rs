//! Peripheral initialisation and raw register helpers.

pub mod hw_init;
