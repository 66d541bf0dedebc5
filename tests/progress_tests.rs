// Host-side tests for scroll progress computation and frame coalescing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod progress {
    include!("../src/core/progress.rs");
}

use progress::*;

fn geom(scroll_y: f64, top: f64, height: f64, viewport: f64) -> ScrollGeometry {
    ScrollGeometry {
        scroll_y,
        container_top: top,
        container_height: height,
        viewport_height: viewport,
    }
}

const WHOLE: ProgressMode = ProgressMode::Viewport {
    window_fraction: 1.0,
};

#[test]
fn clamp_progress_stays_in_unit_interval() {
    for p in [-10.0, -0.01, 0.0, 0.3, 1.0, 1.01, 99.0] {
        let c = clamp_progress(p);
        assert!((0.0..=1.0).contains(&c), "{p} -> {c}");
    }
    assert_eq!(clamp_progress(f64::NAN), 0.0);
    assert_eq!(clamp_progress(0.42), 0.42);
}

#[test]
fn viewport_mode_is_fraction_of_first_screen() {
    assert_eq!(compute_progress(&geom(0.0, 0.0, 0.0, 800.0), WHOLE), 0.0);
    assert_eq!(compute_progress(&geom(400.0, 0.0, 0.0, 800.0), WHOLE), 0.5);
    assert_eq!(compute_progress(&geom(800.0, 0.0, 0.0, 800.0), WHOLE), 1.0);
    assert_eq!(compute_progress(&geom(5000.0, 0.0, 0.0, 800.0), WHOLE), 1.0);
}

#[test]
fn viewport_mode_window_fraction_finishes_earlier() {
    let eighty = ProgressMode::Viewport {
        window_fraction: 0.8,
    };
    assert_eq!(compute_progress(&geom(320.0, 0.0, 0.0, 800.0), eighty), 0.5);
    assert_eq!(compute_progress(&geom(640.0, 0.0, 0.0, 800.0), eighty), 1.0);
}

#[test]
fn container_mode_tracks_scroll_through_container() {
    // container 3000px tall starting at 1000px, viewport 1000px => 2000px of travel
    let m = ProgressMode::Container;
    assert_eq!(compute_progress(&geom(500.0, 1000.0, 3000.0, 1000.0), m), 0.0);
    assert_eq!(compute_progress(&geom(1000.0, 1000.0, 3000.0, 1000.0), m), 0.0);
    assert_eq!(compute_progress(&geom(2000.0, 1000.0, 3000.0, 1000.0), m), 0.5);
    assert_eq!(compute_progress(&geom(3000.0, 1000.0, 3000.0, 1000.0), m), 1.0);
    assert_eq!(compute_progress(&geom(9000.0, 1000.0, 3000.0, 1000.0), m), 1.0);
}

#[test]
fn short_container_never_yields_nan_or_negative() {
    let m = ProgressMode::Container;
    // shorter than the viewport
    let before = compute_progress(&geom(100.0, 1000.0, 600.0, 1000.0), m);
    let after = compute_progress(&geom(1200.0, 1000.0, 600.0, 1000.0), m);
    assert_eq!(before, 0.0);
    assert_eq!(after, 1.0);
    // exactly viewport height
    let equal = compute_progress(&geom(1000.0, 1000.0, 1000.0, 1000.0), m);
    assert_eq!(equal, 1.0);
    assert!(!equal.is_nan());
}

#[test]
fn zero_viewport_is_defined() {
    let p = compute_progress(&geom(0.0, 0.0, 0.0, 0.0), WHOLE);
    assert!((0.0..=1.0).contains(&p));
}

#[test]
fn coalescer_schedules_one_frame_per_burst() {
    let mut c = FrameCoalescer::default();
    let scheduled = (0..50).filter(|_| c.request()).count();
    assert_eq!(scheduled, 1);
    assert!(c.is_pending());
    assert!(c.take());
    assert!(!c.take(), "second take in the same frame must be empty");
    assert!(c.request(), "a new burst schedules again");
}
