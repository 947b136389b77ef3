//! UART transport adapter.
//!
//! On ESP-IDF the bytes go to the host UART installed by
//! [`hw_init::init_host_uart`].  On host builds the transport captures
//! everything written so tests can decode the stream.

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::error::TransportError;
use crate::protocol::transport::Transport;

/// The device's serial link to the host.
pub struct UartTransport {
    #[cfg(not(target_os = "espidf"))]
    captured: Vec<u8>,
    /// Remaining bytes the simulated TX buffer will accept; `None` = unlimited.
    #[cfg(not(target_os = "espidf"))]
    budget: Option<usize>,
}

#[cfg(target_os = "espidf")]
impl UartTransport {
    /// Install the UART driver and take ownership of the port.
    pub fn open(baud: u32) -> Result<Self, crate::error::Error> {
        hw_init::init_host_uart(baud)?;
        Ok(Self {})
    }
}

#[cfg(target_os = "espidf")]
impl Transport for UartTransport {
    type Error = TransportError;

    fn write(&mut self, data: &[u8]) -> Result<usize, TransportError> {
        hw_init::uart_write(data)
    }
}

#[cfg(not(target_os = "espidf"))]
impl UartTransport {
    pub fn open(baud: u32) -> Result<Self, crate::error::Error> {
        log::info!("uart(sim): opened at {} baud", baud);
        Ok(Self {
            captured: Vec::new(),
            budget: None,
        })
    }

    /// Limit how many more bytes the simulated TX buffer accepts.
    pub fn set_budget(&mut self, bytes: Option<usize>) {
        self.budget = bytes;
    }

    /// Everything written so far.
    pub fn captured(&self) -> &[u8] {
        &self.captured
    }

    pub fn take_captured(&mut self) -> Vec<u8> {
        core::mem::take(&mut self.captured)
    }
}

#[cfg(not(target_os = "espidf"))]
impl Transport for UartTransport {
    type Error = TransportError;

    fn write(&mut self, data: &[u8]) -> Result<usize, TransportError> {
        let n = match self.budget {
            Some(0) => return Err(TransportError::NotReady),
            Some(room) => data.len().min(room),
            None => data.len(),
        };
        if let Some(room) = self.budget.as_mut() {
            *room -= n;
        }
        self.captured.extend_from_slice(&data[..n]);
        Ok(n)
    }
}
