//! Integration tests for the detectors driven through `SurfaceDriver`.

use super::mock_hw::{MockSurface, RecordingSink};

use ctlsurface::app::service::SurfaceDriver;
use ctlsurface::config::SurfaceConfig;
use ctlsurface::protocol::frame::Frame;
use ctlsurface::protocol::value::ValueEncoding;

fn scenario_config() -> SurfaceConfig {
    SurfaceConfig {
        analog_threshold: 10,
        idle_timeout_cycles: 3,
        ..SurfaceConfig::default()
    }
}

#[test]
fn button_press_and_release_report_on_their_cycles() {
    let mut driver = SurfaceDriver::new(&SurfaceConfig::default());
    let mut hw = MockSurface::default();
    let mut sink = RecordingSink::new();

    let mut per_cycle = Vec::new();
    for level in [false, false, true, true, false] {
        hw.buttons[0] = level;
        driver.cycle(&mut hw, &mut sink);
        per_cycle.push(sink.take());
    }

    assert_eq!(
        per_cycle,
        vec![
            vec![],
            vec![],
            vec![Frame::button(0, true)],
            vec![],
            vec![Frame::button(0, false)],
        ]
    );
    assert_eq!(Frame::button(0, true).to_bytes(), [b'B', 0, 1, 0, 0x43]);
}

#[test]
fn pot_window_scenario_on_channel_two() {
    let mut driver = SurfaceDriver::new(&scenario_config());
    let mut hw = MockSurface::default();
    let mut sink = RecordingSink::new();
    let pot = |raw| Frame::pot(2, raw, ValueEncoding::NibbleSplit);

    let mut per_cycle = Vec::new();
    for raw in [0, 0, 50, 50, 50, 52] {
        hw.pots[2] = raw;
        driver.cycle(&mut hw, &mut sink);
        per_cycle.push(sink.take());
    }

    assert_eq!(
        per_cycle,
        vec![vec![], vec![], vec![pot(50)], vec![pot(50)], vec![], vec![]]
    );
    assert_eq!(pot(50).to_bytes(), [b'P', 2, 2, 3, 0x57]);
    assert_eq!(driver.analog().channels()[2].decay(), 1);
}

#[test]
fn steady_inputs_go_quiet() {
    let mut driver = SurfaceDriver::new(&scenario_config());
    let mut hw = MockSurface::default();
    let mut sink = RecordingSink::new();

    hw.buttons = [true, false, true, false];
    hw.pots = [0, 800, 0, 2000];

    // Two button edges now, two pot reports now and on the next cycle.
    driver.cycle(&mut hw, &mut sink);
    assert_eq!(sink.take().len(), 4);
    driver.cycle(&mut hw, &mut sink);
    assert_eq!(sink.take().len(), 2);

    for _ in 0..500 {
        driver.cycle(&mut hw, &mut sink);
    }
    assert!(sink.frames.is_empty());
    assert_eq!(driver.cycles(), 502);
    assert_eq!(driver.frames_sent(), 6);
}

#[test]
fn every_channel_is_read_every_cycle() {
    let mut driver = SurfaceDriver::new(&SurfaceConfig::default());
    let mut hw = MockSurface::default();
    let mut sink = RecordingSink::new();

    for _ in 0..10 {
        driver.cycle(&mut hw, &mut sink);
    }
    assert_eq!(hw.reads, 10 * 8);
}

#[test]
fn button_frames_precede_pot_frames_within_a_cycle() {
    let mut driver = SurfaceDriver::new(&SurfaceConfig::default());
    let mut hw = MockSurface::default();
    let mut sink = RecordingSink::new();

    hw.pots[0] = 4000;
    hw.buttons[3] = true;
    hw.pots[3] = 100;
    driver.cycle(&mut hw, &mut sink);

    assert_eq!(
        sink.frames,
        vec![
            Frame::button(3, true),
            Frame::pot(0, 4000, ValueEncoding::NibbleSplit),
            Frame::pot(3, 100, ValueEncoding::NibbleSplit),
        ]
    );
}

#[test]
fn turning_knob_reports_every_cycle() {
    let mut driver = SurfaceDriver::new(&scenario_config());
    let mut hw = MockSurface::default();
    let mut sink = RecordingSink::new();

    for step in 1..=40u16 {
        hw.pots[1] = step * 25;
        driver.cycle(&mut hw, &mut sink);
    }
    let raws: Vec<u16> = sink
        .frames
        .iter()
        .map(|f| ValueEncoding::NibbleSplit.decode(f.data1(), f.data2()))
        .collect();
    assert_eq!(raws, (1..=40).map(|s| s * 25).collect::<Vec<_>>());
}
