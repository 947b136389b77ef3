//! GPIO / peripheral pin assignments for the control-surface board.
//!
//! Single source of truth for the logical-channel → physical-pin map.
//! Array position is the channel index that goes on the wire, so
//! reordering an array renumbers the channels the host sees.

// ---------------------------------------------------------------------------
// Channel counts
// ---------------------------------------------------------------------------

/// Number of digital (button) channels.
pub const BUTTON_COUNT: usize = 4;
/// Number of analog (potentiometer) channels.
pub const POT_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// Buttons: digital inputs, active HIGH with internal pull-down
// ---------------------------------------------------------------------------

/// Button GPIOs, indexed by channel.
pub const BUTTON_GPIOS: [i32; BUTTON_COUNT] = [14, 13, 12, 11];

// ---------------------------------------------------------------------------
// Potentiometers on ADC1 (GPIO n+1 carries ADC1_CHn on ESP32-S3)
// ---------------------------------------------------------------------------

/// Potentiometer GPIOs, indexed by channel (for logging / diagnostics).
pub const POT_GPIOS: [i32; POT_COUNT] = [4, 3, 2, 1];
/// ADC1 channel numbers matching [`POT_GPIOS`].
pub const POT_ADC1_CHANNELS: [u32; POT_COUNT] = [3, 2, 1, 0];

// ---------------------------------------------------------------------------
// UART link to the host
// ---------------------------------------------------------------------------

/// Hardware UART port used for the frame stream.
pub const HOST_UART_PORT: i32 = 1;
pub const HOST_UART_TX_GPIO: i32 = 17;
pub const HOST_UART_RX_GPIO: i32 = 18;
/// TX ring buffer handed to the UART driver.  Large enough for every
/// channel to report in the same cycle several times over.
pub const HOST_UART_TX_BUFFER: i32 = 256;
/// RX ring buffer.  Nothing is read back, but the driver requires one
/// larger than the hardware FIFO.
pub const HOST_UART_RX_BUFFER: i32 = 256;
