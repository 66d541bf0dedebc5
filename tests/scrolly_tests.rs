// Host-side tests for the scrollytelling frame mapper.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod progress {
        include!("../src/core/progress.rs");
    }
    pub mod scrolly {
        include!("../src/core/scrolly.rs");
    }
}

use crate::core::progress::ScrollGeometry;
use crate::core::scrolly::*;

fn meta(duration: f64) -> VideoMetadata {
    VideoMetadata {
        duration,
        width: 1280,
        height: 720,
    }
}

fn ready_mapper() -> ScrollyVideoMapper {
    let mut m = ScrollyVideoMapper::default();
    assert!(m.on_metadata(meta(3.0)));
    m
}

#[test]
fn frame_index_endpoints() {
    assert_eq!(frame_index(0.0, 90), Some(0));
    assert_eq!(frame_index(1.0, 90), Some(89));
    assert_eq!(frame_index(0.5, 90), Some(45));
    assert_eq!(frame_index(0.999, 90), Some(89));
}

#[test]
fn frame_index_saturates_out_of_range() {
    assert_eq!(frame_index(-1.0, 90), frame_index(0.0, 90));
    assert_eq!(frame_index(4.0, 90), frame_index(1.0, 90));
}

#[test]
fn frame_index_without_frames_is_none() {
    assert_eq!(frame_index(0.5, 0), None);
}

#[test]
fn frame_index_is_monotonic() {
    let mut prev = 0;
    for i in 0..=2000 {
        let idx = frame_index(i as f64 / 2000.0, 90).unwrap();
        assert!(idx >= prev);
        assert!(idx < 90);
        prev = idx;
    }
}

#[test]
fn timeline_uses_assumed_frame_rate() {
    let t = VideoTimeline::new(3.0, 30.0);
    assert_eq!(t.frame_count, 90);
    assert_eq!(t.frame_time(0), Some(0.0));
    assert!((t.frame_time(45).unwrap() - 1.5).abs() < 1e-12);
    assert_eq!(VideoTimeline::new(2.99, 30.0).frame_count, 89);
}

#[test]
fn timeline_with_bad_duration_has_no_frames() {
    for d in [0.0, -4.0, f64::NAN, f64::INFINITY, 0.01] {
        let t = VideoTimeline::new(d, 30.0);
        assert_eq!(t.frame_count, 0, "duration {d}");
        assert_eq!(t.frame_time(0), None);
    }
}

#[test]
fn update_requests_seek_to_frame_start() {
    let mut m = ready_mapper();
    let f = m.update(0.5, 0.0);
    assert_eq!(f.frame_index, Some(45));
    assert!((f.seek_to.unwrap() - 1.5).abs() < 1e-12);
}

#[test]
fn same_progress_twice_seeks_at_most_once() {
    let mut m = ready_mapper();
    let first = m.update(0.25, 0.0);
    assert!(first.seek_to.is_some());
    // environment has not caught up yet: current_time still 0
    let second = m.update(0.25, 0.0);
    assert_eq!(second.seek_to, None);
    // environment caught up
    let third = m.update(0.25, first.seek_to.unwrap());
    assert_eq!(third.seek_to, None);
}

#[test]
fn no_seek_when_already_at_target() {
    let mut m = ready_mapper();
    let target = m.timeline().unwrap().frame_time(45).unwrap();
    let f = m.update(0.5, target);
    assert_eq!(f.frame_index, Some(45));
    assert_eq!(f.seek_to, None);
}

#[test]
fn scrolling_back_seeks_again() {
    let mut m = ready_mapper();
    let a = m.update(0.2, 0.0).seek_to.unwrap();
    let b = m.update(0.6, a).seek_to.unwrap();
    let again = m.update(0.2, b).seek_to;
    assert_eq!(again, Some(a));
}

#[test]
fn without_metadata_all_seeks_are_skipped() {
    let mut m = ScrollyVideoMapper::default();
    for p in [0.0, 0.3, 0.9, 1.0] {
        let f = m.update(p, 0.0);
        assert_eq!(f.frame_index, None);
        assert_eq!(f.seek_to, None);
    }
    assert!(!m.on_seeked());
    assert_eq!(m.initial_seek(), None);
}

#[test]
fn broken_metadata_leaves_mapper_inert() {
    let mut m = ScrollyVideoMapper::default();
    assert!(m.on_metadata(meta(f64::NAN)));
    assert_eq!(m.frame_count(), 0);
    assert_eq!(m.update(0.7, 0.0).seek_to, None);
    // prompt and overlay are still driven
    let f = m.update(0.9, 0.0);
    assert!(!f.prompt_visible);
    assert!((f.overlay_opacity - 0.5).abs() < 1e-9);
}

#[test]
fn metadata_is_accepted_once() {
    let mut m = ready_mapper();
    assert!(!m.on_metadata(meta(10.0)));
    assert_eq!(m.frame_count(), 90);
    assert_eq!(m.raster_size(), Some((1280, 720)));
}

#[test]
fn initial_seek_targets_first_frame() {
    let mut m = ready_mapper();
    assert_eq!(m.initial_seek(), Some(0.0));
    // the first scroll update at progress 0 is already satisfied
    assert_eq!(m.update(0.0, 0.0).seek_to, None);
    assert!(m.on_seeked());
}

#[test]
fn prompt_visible_only_at_zero() {
    let mut m = ready_mapper();
    assert!(m.update(0.0, 0.0).prompt_visible);
    assert!(m.update(-0.2, 0.0).prompt_visible);
    assert!(!m.update(0.001, 0.0).prompt_visible);
    assert!(!m.update(1.0, 0.0).prompt_visible);
}

#[test]
fn overlay_ramps_over_last_fifth() {
    assert_eq!(overlay_opacity(0.0, 0.8), 0.0);
    assert_eq!(overlay_opacity(0.5, 0.8), 0.0);
    assert_eq!(overlay_opacity(0.8, 0.8), 0.0);
    assert!((overlay_opacity(0.9, 0.8) - 0.5).abs() < 1e-9);
    assert!((overlay_opacity(1.0, 0.8) - 1.0).abs() < 1e-9);
    assert!((overlay_opacity(5.0, 0.8) - 1.0).abs() < 1e-9);
}

#[test]
fn progress_is_container_relative() {
    let m = ScrollyVideoMapper::default();
    let g = ScrollGeometry {
        scroll_y: 2000.0,
        container_top: 1000.0,
        container_height: 3000.0,
        viewport_height: 1000.0,
    };
    assert_eq!(m.progress(&g), 0.5);
}
