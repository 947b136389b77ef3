//! Control-surface firmware: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter          LoggingSink ─▶ TransportSink   │
//! │  (Digital+AnalogSource)   (FrameSink)    (UartTransport) │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ────────────────    │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │          PollingDriver (pure logic)                │  │
//! │  │  DigitalDetector · AnalogDetector · Frame encoder  │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

use anyhow::Result;
use log::{info, warn};

use ctlsurface::adapters::hardware::HardwareAdapter;
use ctlsurface::adapters::log_sink::LoggingSink;
use ctlsurface::adapters::uart::UartTransport;
use ctlsurface::app::service::SurfaceDriver;
use ctlsurface::config::SurfaceConfig;
use ctlsurface::drivers::hw_init;
use ctlsurface::pins;
use ctlsurface::protocol::transport::TransportSink;

/// Build-time JSON override, e.g.
/// `CTLSURFACE_CONFIG='{"poll_period_ms":50}' cargo build --features espidf`.
fn load_config() -> SurfaceConfig {
    let Some(json) = option_env!("CTLSURFACE_CONFIG") else {
        return SurfaceConfig::default();
    };
    match SurfaceConfig::from_json(json) {
        Ok(cfg) => {
            info!("Config override applied");
            cfg
        }
        Err(e) => {
            warn!("Config override rejected ({}), using defaults", e);
            SurfaceConfig::default()
        }
    }
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  CtlSurface v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = load_config();
    info!(
        "period={}ms threshold={} timeout={} cycles encoding={:?}",
        config.poll_period_ms,
        config.analog_threshold,
        config.idle_timeout_cycles,
        config.value_encoding
    );

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals()?;
    let uart = UartTransport::open(config.uart_baud)?;

    // ── 4. Adapters ───────────────────────────────────────────
    let mut hw = HardwareAdapter::new(config.adc_max());
    let mut sink = LoggingSink::new(TransportSink::new(uart), config.value_encoding);
    let mut delay = esp_idf_svc::hal::delay::FreeRtos;

    info!(
        "buttons on GPIO{:?}, pots on ADC1 CH{:?}",
        pins::BUTTON_GPIOS,
        pins::POT_ADC1_CHANNELS
    );

    // ── 5. Poll forever ───────────────────────────────────────
    let mut driver = SurfaceDriver::new(&config);
    driver.run(&mut hw, &mut sink, &mut delay)
}
