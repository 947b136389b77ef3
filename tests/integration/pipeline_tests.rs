//! Full firmware pipeline on the host simulation: simulated pins →
//! `HardwareAdapter` → `SurfaceDriver` → `LoggingSink` → UART capture.
//!
//! The simulated pin levels are process-wide, so everything that touches
//! them lives in this one test.

use ctlsurface::adapters::hardware::HardwareAdapter;
use ctlsurface::adapters::log_sink::LoggingSink;
use ctlsurface::adapters::uart::UartTransport;
use ctlsurface::app::events::InputEvent;
use ctlsurface::app::service::SurfaceDriver;
use ctlsurface::config::SurfaceConfig;
use ctlsurface::drivers::hw_init;
use ctlsurface::pins;
use ctlsurface::protocol::decoder::FrameDecoder;
use ctlsurface::protocol::transport::TransportSink;

#[test]
fn simulated_board_reaches_the_host() {
    let config = SurfaceConfig {
        idle_timeout_cycles: 2,
        ..SurfaceConfig::default()
    };
    hw_init::init_peripherals().unwrap();

    let mut hw = HardwareAdapter::new(config.adc_max());
    let uart = UartTransport::open(config.uart_baud).unwrap();
    let mut sink = LoggingSink::new(TransportSink::new(uart), config.value_encoding);
    let mut driver = SurfaceDriver::new(&config);

    hw_init::sim_set_gpio(pins::BUTTON_GPIOS[3], true);
    hw_init::sim_set_adc1(pins::POT_ADC1_CHANNELS[1], 2048);
    driver.cycle(&mut hw, &mut sink);
    // Window of two cycles yields one report; this cycle is silent.
    driver.cycle(&mut hw, &mut sink);

    hw_init::sim_set_gpio(pins::BUTTON_GPIOS[3], false);
    hw_init::sim_set_adc1(pins::POT_ADC1_CHANNELS[1], 0);
    driver.cycle(&mut hw, &mut sink);

    let tx = sink.into_inner();
    assert_eq!(tx.sent(), 4);
    assert_eq!(tx.dropped(), 0);

    let events: Vec<InputEvent> = FrameDecoder::new()
        .feed(tx.transport().captured())
        .iter()
        .map(|f| InputEvent::from_frame(f, config.value_encoding))
        .collect();
    assert_eq!(
        events,
        vec![
            InputEvent::Button { index: 3, pressed: true },
            InputEvent::Pot { index: 1, raw: 2048 },
            InputEvent::Button { index: 3, pressed: false },
            InputEvent::Pot { index: 1, raw: 0 },
        ]
    );
    assert_eq!(hw.read_failures(), 0);
}
