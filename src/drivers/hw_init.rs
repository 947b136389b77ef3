//! One-shot hardware peripheral initialization.
//!
//! Configures the button GPIOs, the ADC1 potentiometer channels, and the
//! host UART using raw ESP-IDF sys calls.  Called once from `main()` before
//! the polling loop starts.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: real register / driver access.
//! On host/test: GPIO levels and ADC readings come from injectable statics
//! (`sim_set_gpio`, `sim_set_adc1`); UART output is captured by
//! [`UartTransport`](crate::adapters::uart::UartTransport) instead.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::error::TransportError;
#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
    UartInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::UartInitFailed(rc) => write!(f, "UART init failed (rc={})", rc),
        }
    }
}

impl core::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the polling loop; single-threaded.
    unsafe {
        init_adc()?;
        init_button_inputs()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// polling-loop read path.  `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    // 12 dB attenuation spans the full 0 – 3.1 V pot travel.
    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for &channel in &pins::POT_ADC1_CHANNELS {
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }
    }

    info!("hw_init: ADC1 configured (pots on CH{:?})", pins::POT_ADC1_CHANNELS);
    Ok(())
}

/// One-shot read of an ADC1 channel.  `None` if the driver reports an error.
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> Option<u16> {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract, single-threaded polling-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return None;
    }
    Some(raw.max(0) as u16)
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(channel: u32) -> Option<u16> {
    sim::ADC1
        .get(channel as usize)
        .map(|v| v.load(core::sync::atomic::Ordering::Relaxed))
}

// ── GPIO inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_button_inputs() -> Result<(), HwInitError> {
    let mask = pins::BUTTON_GPIOS
        .iter()
        .fold(0u64, |mask, &pin| mask | (1u64 << pin));

    // Buttons pull the line HIGH when pressed; idle level is LOW.
    let cfg = gpio_config_t {
        pin_bit_mask: mask,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        ..Default::default()
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }

    info!("hw_init: button GPIOs {:?} configured", pins::BUTTON_GPIOS);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(pin: i32) -> bool {
    usize::try_from(pin)
        .ok()
        .and_then(|p| sim::GPIO.get(p))
        .is_some_and(|level| level.load(core::sync::atomic::Ordering::Relaxed))
}

// ── Host UART ─────────────────────────────────────────────────

/// Install the UART driver for the host link.
#[cfg(target_os = "espidf")]
pub fn init_host_uart(baud: u32) -> Result<(), HwInitError> {
    let cfg = uart_config_t {
        baud_rate: baud as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };

    // SAFETY: Called once from main() before the polling loop; the port is
    // not touched by any other task.
    unsafe {
        let ret = uart_param_config(pins::HOST_UART_PORT, &cfg);
        if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }

        // -1 = UART_PIN_NO_CHANGE for RTS/CTS.
        let ret = uart_set_pin(
            pins::HOST_UART_PORT,
            pins::HOST_UART_TX_GPIO,
            pins::HOST_UART_RX_GPIO,
            -1,
            -1,
        );
        if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }

        let ret = uart_driver_install(
            pins::HOST_UART_PORT,
            pins::HOST_UART_RX_BUFFER,
            pins::HOST_UART_TX_BUFFER,
            0,
            core::ptr::null_mut(),
            0,
        );
        if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }
    }

    info!(
        "hw_init: UART{} at {} baud (tx=GPIO{})",
        pins::HOST_UART_PORT, baud, pins::HOST_UART_TX_GPIO
    );
    Ok(())
}

/// Queue bytes on the host UART.  Copies into the driver's TX ring buffer
/// and returns without waiting for the line.
#[cfg(target_os = "espidf")]
pub fn uart_write(data: &[u8]) -> Result<usize, TransportError> {
    // SAFETY: the driver was installed by init_host_uart(); `data` outlives
    // the call and the driver copies it before returning.
    let ret = unsafe {
        uart_write_bytes(
            pins::HOST_UART_PORT,
            data.as_ptr().cast::<core::ffi::c_void>(),
            data.len(),
        )
    };
    if ret < 0 {
        return Err(TransportError::WriteFailed(ret));
    }
    Ok(ret as usize)
}

// ── Host simulation ───────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
mod sim {
    use core::sync::atomic::{AtomicBool, AtomicU16};

    /// ESP32-S3 exposes GPIO0 – GPIO48.
    pub(super) static GPIO: [AtomicBool; 49] = [const { AtomicBool::new(false) }; 49];
    /// ADC1 has ten channels.
    pub(super) static ADC1: [AtomicU16; 10] = [const { AtomicU16::new(0) }; 10];
}

/// Drive a simulated GPIO input level.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_gpio(pin: i32, high: bool) {
    if let Some(level) = usize::try_from(pin).ok().and_then(|p| sim::GPIO.get(p)) {
        level.store(high, core::sync::atomic::Ordering::Relaxed);
    }
}

/// Set a simulated ADC1 channel reading.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc1(channel: u32, raw: u16) {
    if let Some(v) = sim::ADC1.get(channel as usize) {
        v.store(raw, core::sync::atomic::Ordering::Relaxed);
    }
}
