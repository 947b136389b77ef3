//! Fuzz target: `FrameDecoder::feed`
//!
//! Drives arbitrary byte sequences into the resynchronising decoder and
//! asserts that it never panics, only yields checksum-valid frames, and
//! behaves identically whether bytes arrive in one chunk or one at a time.
//!
//! cargo fuzz run fuzz_frame_decoder

#![no_main]

use ctlsurface::protocol::decoder::FrameDecoder;
use ctlsurface::protocol::frame::Frame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut chunked = FrameDecoder::new();
    let frames = chunked.feed(data);

    for frame in &frames {
        let bytes = frame.to_bytes();
        assert_eq!(Frame::from_bytes(bytes), Ok(*frame), "decoder yielded an invalid frame");
    }

    let mut bytewise = FrameDecoder::new();
    let one_by_one: Vec<Frame> = data.iter().filter_map(|&b| bytewise.push(b)).collect();
    assert_eq!(frames, one_by_one);
    assert_eq!(chunked.skipped_bytes(), bytewise.skipped_bytes());

    // After a reset the decoder must accept bytes cleanly again.
    chunked.reset();
    let _ = chunked.feed(data);
});
