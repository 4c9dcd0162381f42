// src/framebuffer/tests.rs

use super::*;
use test_log::test;

fn active(width: u32, height: u32) -> Framebuffer {
    let mut fb = Framebuffer::new();
    fb.start_frame(width, height, true).unwrap();
    fb
}

#[test]
fn new_framebuffer_is_idle_and_empty() {
    let fb = Framebuffer::new();
    assert_eq!(fb.state(), FrameState::Idle);
    assert_eq!((fb.width(), fb.height()), (0, 0));
}

#[test]
fn put_then_get_uses_row_major_layout() {
    let mut fb = active(4, 3);
    fb.put_pixel(2, 1, Color::RED).unwrap();
    assert_eq!(fb.get_pixel(2, 1).unwrap(), Color::RED);
    assert_eq!(fb.get_pixel(1, 2).unwrap(), Color::TRANSPARENT);

    let frame = fb.end_frame().unwrap();
    assert_eq!(frame.pixels()[2 + 4], Color::RED.to_packed());
    assert_eq!(frame.pixels().len(), 12);
}

#[test]
fn out_of_bounds_writes_are_ignored() {
    let mut fb = active(3, 3);
    fb.put_pixel(1, 1, Color::BLUE).unwrap();
    for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX), (100, 100)] {
        fb.put_pixel(x, y, Color::RED).unwrap();
    }
    let frame = fb.end_frame().unwrap();
    let expected: Vec<u32> = (0..9)
        .map(|i| if i == 4 { Color::BLUE.to_packed() } else { 0 })
        .collect();
    assert_eq!(frame.pixels(), expected.as_slice());
}

#[test]
fn out_of_bounds_reads_fail() {
    let fb = active(3, 2);
    for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2)] {
        assert_eq!(
            fb.get_pixel(x, y),
            Err(RasterError::OutOfBounds {
                x,
                y,
                width: 3,
                height: 2
            })
        );
    }
    assert!(fb.in_bounds(2, 1));
    assert!(!fb.in_bounds(3, 1));
}

#[test]
fn drawing_after_end_frame_is_rejected() {
    let mut fb = active(2, 2);
    let _frame = fb.end_frame().unwrap();

    assert!(matches!(
        fb.put_pixel(0, 0, Color::RED),
        Err(RasterError::InvalidFrameState {
            operation: "put_pixel",
            state: FrameState::Idle
        })
    ));
    // Coordinates do not matter once the frame is over.
    assert!(fb.put_pixel(-5, -5, Color::RED).is_err());
    assert!(fb.get_pixel(0, 0).is_err());
    assert!(fb.clear(Color::RED).is_err());
    assert!(fb.end_frame().is_err());
}

#[test]
fn drawing_before_first_frame_is_rejected() {
    let mut fb = Framebuffer::new();
    assert!(matches!(
        fb.put_pixel(0, 0, Color::RED),
        Err(RasterError::InvalidFrameState { .. })
    ));
}

#[test]
fn starting_twice_is_rejected() {
    let mut fb = active(2, 2);
    assert!(matches!(
        fb.start_frame(2, 2, true),
        Err(RasterError::InvalidFrameState {
            operation: "start_frame",
            state: FrameState::Active
        })
    ));
    // The original frame is still usable.
    fb.put_pixel(1, 1, Color::GREEN).unwrap();
}

#[test]
fn reclaimed_buffer_keeps_contents_without_clear() {
    let mut fb = active(3, 3);
    fb.put_pixel(0, 0, Color::RED).unwrap();
    let frame = fb.end_frame().unwrap();
    fb.reclaim(frame);

    fb.start_frame(3, 3, false).unwrap();
    assert_eq!(fb.get_pixel(0, 0).unwrap(), Color::RED);
    let frame = fb.end_frame().unwrap();
    fb.reclaim(frame);

    fb.start_frame(3, 3, true).unwrap();
    assert_eq!(fb.get_pixel(0, 0).unwrap(), Color::TRANSPARENT);
}

#[test]
fn unreclaimed_buffer_starts_transparent() {
    let mut fb = active(2, 2);
    fb.put_pixel(0, 0, Color::RED).unwrap();
    let _gone = fb.end_frame().unwrap();

    fb.start_frame(2, 2, false).unwrap();
    assert_eq!(fb.get_pixel(0, 0).unwrap(), Color::TRANSPARENT);
}

#[test]
fn resize_reallocates_and_drops_stale_returns() {
    let mut fb = active(2, 2);
    fb.put_pixel(1, 1, Color::RED).unwrap();
    let old = fb.end_frame().unwrap();

    fb.start_frame(5, 4, false).unwrap();
    assert_eq!((fb.width(), fb.height()), (5, 4));
    assert_eq!(fb.get_pixel(1, 1).unwrap(), Color::TRANSPARENT);
    fb.put_pixel(4, 3, Color::BLUE).unwrap();
    let frame = fb.end_frame().unwrap();
    assert_eq!(frame.pixels().len(), 20);

    // A 2x2 buffer coming back late must not be reused for a 5x4 frame.
    fb.reclaim(old);
    fb.start_frame(5, 4, false).unwrap();
    assert_eq!(fb.get_pixel(4, 3).unwrap(), Color::TRANSPARENT);
}

#[test]
fn clear_color_is_used_on_start() {
    let mut fb = Framebuffer::new();
    fb.set_clear_color(Color::WHITE);
    fb.start_frame(2, 1, true).unwrap();
    assert_eq!(fb.get_pixel(1, 0).unwrap(), Color::WHITE);
    fb.clear(Color::BLUE).unwrap();
    assert_eq!(fb.get_pixel(0, 0).unwrap(), Color::BLUE);
}

#[test]
fn zero_sized_frame_accepts_writes_and_rejects_reads() {
    let mut fb = active(0, 0);
    fb.put_pixel(0, 0, Color::RED).unwrap();
    assert!(matches!(fb.get_pixel(0, 0), Err(RasterError::OutOfBounds { .. })));
    assert!(fb.end_frame().unwrap().pixels().is_empty());
}

#[test]
fn frame_accessors() {
    let mut fb = active(2, 1);
    fb.put_pixel(1, 0, Color::from_channels(1, 2, 3, 4)).unwrap();
    let frame = fb.end_frame().unwrap();
    assert_eq!((frame.width(), frame.height()), (2, 1));
    assert_eq!(frame.pixel(1, 0), Some(Color::from_channels(1, 2, 3, 4)));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.to_rgba_bytes(), vec![0, 0, 0, 0, 1, 2, 3, 4]);
    assert_eq!(frame.into_pixels().len(), 2);
}
