// src/display/manager/tests.rs

use super::*;
use crate::display::HeadlessSurface;
use crate::framebuffer::Framebuffer;
use test_log::test;

fn frame(width: u32, height: u32) -> Frame {
    let mut fb = Framebuffer::new();
    fb.start_frame(width, height, true).unwrap();
    fb.end_frame().unwrap()
}

#[test]
fn metrics_track_the_last_query() {
    let mut manager = DisplayManager::new(HeadlessSurface::new(4, 3));
    assert_eq!(manager.metrics(), None);

    let queried = manager.query_metrics().unwrap();
    assert_eq!(
        queried,
        DisplayMetrics {
            width_px: 4,
            height_px: 3
        }
    );
    assert_eq!(manager.metrics(), Some(queried));

    manager.surface_mut().resize(8, 2);
    assert_eq!(manager.metrics(), Some(queried));
    manager.query_metrics().unwrap();
    assert_eq!(
        manager.metrics(),
        Some(DisplayMetrics {
            width_px: 8,
            height_px: 2
        })
    );
}

#[test]
fn failed_query_keeps_previous_metrics() {
    let mut manager = DisplayManager::new(HeadlessSurface::new(5, 5));
    let before = manager.query_metrics().unwrap();

    manager.surface_mut().set_detached(true);
    let err = manager.query_metrics().unwrap_err();
    assert!(matches!(err, RasterError::Surface(ref msg) if msg.contains("surface unavailable")));
    assert_eq!(manager.metrics(), Some(before));
}

#[test]
fn present_returns_the_frame_on_success_and_on_failure() {
    let mut manager = DisplayManager::new(HeadlessSurface::new(2, 2));

    let (returned, outcome) = manager.present(frame(2, 2));
    assert!(outcome.is_ok());
    assert_eq!(returned.map(|f| (f.width(), f.height())), Some((2, 2)));

    manager.surface_mut().fail_next_present("vsync timeout");
    let (returned, outcome) = manager.present(frame(2, 2));
    assert!(returned.is_some());
    assert!(matches!(outcome, Err(RasterError::Surface(ref msg)) if msg.contains("vsync timeout")));
}

#[test]
fn unavailable_surface_does_not_return_the_frame() {
    let mut manager = DisplayManager::new(HeadlessSurface::new(2, 2));
    manager.surface_mut().set_detached(true);

    let (returned, outcome) = manager.present(frame(2, 2));
    assert!(returned.is_none());
    assert!(matches!(outcome, Err(RasterError::Surface(_))));

    let surface = manager.into_surface();
    assert_eq!(surface.frames_presented(), 0);
    assert!(surface.last_frame().is_none());
}
