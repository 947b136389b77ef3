//! Device-to-host stream tests: driver → UART capture → `FrameDecoder`.

use super::mock_hw::MockSurface;

use ctlsurface::adapters::uart::UartTransport;
use ctlsurface::app::events::InputEvent;
use ctlsurface::app::ports::FrameSink;
use ctlsurface::app::service::SurfaceDriver;
use ctlsurface::config::SurfaceConfig;
use ctlsurface::protocol::FRAME_LEN;
use ctlsurface::protocol::decoder::FrameDecoder;
use ctlsurface::protocol::frame::Frame;
use ctlsurface::protocol::transport::TransportSink;
use ctlsurface::protocol::value::ValueEncoding;

fn uart_sink() -> TransportSink<UartTransport> {
    TransportSink::new(UartTransport::open(115_200).unwrap())
}

#[test]
fn host_decodes_what_the_device_sends() {
    let config = SurfaceConfig::default();
    let mut driver = SurfaceDriver::new(&config);
    let mut hw = MockSurface::default();
    let mut sink = uart_sink();

    hw.buttons[1] = true;
    hw.pots[2] = 3210;
    driver.cycle(&mut hw, &mut sink);
    hw.buttons[1] = false;
    driver.cycle(&mut hw, &mut sink);

    let bytes = sink.transport().captured().to_vec();
    assert_eq!(bytes.len(), 4 * FRAME_LEN);

    let mut decoder = FrameDecoder::new();
    let events: Vec<InputEvent> = decoder
        .feed(&bytes)
        .iter()
        .map(|f| InputEvent::from_frame(f, config.value_encoding))
        .collect();
    assert_eq!(
        events,
        vec![
            InputEvent::Button { index: 1, pressed: true },
            InputEvent::Pot { index: 2, raw: 3210 },
            InputEvent::Button { index: 1, pressed: false },
            InputEvent::Pot { index: 2, raw: 3210 },
        ]
    );
    assert_eq!(decoder.skipped_bytes(), 0);
}

#[test]
fn lost_byte_costs_one_frame() {
    let mut sink = uart_sink();
    let frames = [
        Frame::button(0, true),
        Frame::button(1, true),
        Frame::button(2, true),
    ];
    for f in &frames {
        sink.send(f);
    }

    let mut bytes = sink.transport_mut().take_captured();
    // Corrupt the stream by dropping the first frame's checksum.
    bytes.remove(FRAME_LEN - 1);

    let mut decoder = FrameDecoder::new();
    assert_eq!(decoder.feed(&bytes), frames[1..].to_vec());
}

#[test]
fn refused_writes_are_counted_not_retried() {
    let mut sink = uart_sink();
    sink.transport_mut().set_budget(Some(FRAME_LEN + 2));

    sink.send(&Frame::button(0, true));
    sink.send(&Frame::button(0, false));
    sink.send(&Frame::button(1, true));

    assert_eq!(sink.sent(), 1);
    assert_eq!(sink.dropped(), 2);
    assert_eq!(sink.transport().captured().len(), FRAME_LEN + 2);
}

#[test]
fn little_endian_stream_round_trips_sixteen_bit_values() {
    let config = SurfaceConfig {
        adc_resolution_bits: 16,
        value_encoding: ValueEncoding::LittleEndian16,
        ..SurfaceConfig::default()
    };
    assert!(config.validate().is_ok());

    let mut driver = SurfaceDriver::new(&config);
    let mut hw = MockSurface::default();
    let mut sink = uart_sink();
    hw.pots[0] = 0xBEEF;
    driver.cycle(&mut hw, &mut sink);

    let frames = FrameDecoder::new().feed(sink.transport().captured());
    assert_eq!(
        InputEvent::from_frame(&frames[0], config.value_encoding),
        InputEvent::Pot { index: 0, raw: 0xBEEF }
    );
}
