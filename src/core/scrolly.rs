// Scroll-to-frame mapping for the scrollytelling video.
//
// The video is never played. Scroll progress picks a discrete frame, the frame
// is turned back into a playback time, and the web layer seeks the `<video>`
// there and blits the decoded frame into a canvas once the seek lands.

use super::constants::{ASSUMED_FRAME_RATE, OVERLAY_RAMP_START};
use super::progress::{clamp_progress, compute_progress, ProgressMode, ScrollGeometry};

/// Properties read from the video element once it becomes seekable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoMetadata {
    pub duration: f64,
    pub width: u32,
    pub height: u32,
}

/// Duration and derived frame count; fixed for the lifetime of the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoTimeline {
    pub duration: f64,
    pub frame_count: u32,
}

impl VideoTimeline {
    pub fn new(duration: f64, frame_rate: f64) -> Self {
        let frames = duration * frame_rate;
        let frame_count = if frames.is_finite() && frames >= 1.0 {
            frames.floor().min(u32::MAX as f64) as u32
        } else {
            0
        };
        Self {
            duration: if frame_count > 0 { duration } else { 0.0 },
            frame_count,
        }
    }

    pub fn frame_index(&self, progress: f64) -> Option<u32> {
        frame_index(progress, self.frame_count)
    }

    /// Playback time of the start of frame `index`.
    pub fn frame_time(&self, index: u32) -> Option<f64> {
        if self.frame_count == 0 {
            return None;
        }
        Some(index as f64 / self.frame_count as f64 * self.duration)
    }
}

/// `floor(progress * frame_count)` clamped to the last frame; `None` with no frames.
#[inline]
pub fn frame_index(progress: f64, frame_count: u32) -> Option<u32> {
    if frame_count == 0 {
        return None;
    }
    let raw = (clamp_progress(progress) * frame_count as f64).floor() as u32;
    Some(raw.min(frame_count - 1))
}

/// Text overlay fades in linearly once progress passes `ramp_start`.
#[inline]
pub fn overlay_opacity(progress: f64, ramp_start: f64) -> f64 {
    let p = clamp_progress(progress);
    let span = 1.0 - ramp_start;
    if p <= ramp_start || span <= 0.0 {
        return 0.0;
    }
    clamp_progress((p - ramp_start) / span)
}

/// Everything the web layer applies after a scroll update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollyFrame {
    pub progress: f64,
    pub frame_index: Option<u32>,
    /// Present only when the element actually has to move.
    pub seek_to: Option<f64>,
    pub prompt_visible: bool,
    pub overlay_opacity: f64,
}

pub struct ScrollyVideoMapper {
    pub frame_rate: f64,
    pub overlay_ramp_start: f64,
    timeline: Option<VideoTimeline>,
    raster_size: Option<(u32, u32)>,
    last_seek: Option<f64>,
}

impl Default for ScrollyVideoMapper {
    fn default() -> Self {
        Self::new(ASSUMED_FRAME_RATE, OVERLAY_RAMP_START)
    }
}

impl ScrollyVideoMapper {
    pub fn new(frame_rate: f64, overlay_ramp_start: f64) -> Self {
        Self {
            frame_rate,
            overlay_ramp_start,
            timeline: None,
            raster_size: None,
            last_seek: None,
        }
    }

    pub fn progress(&self, geometry: &ScrollGeometry) -> f64 {
        compute_progress(geometry, ProgressMode::Container)
    }

    /// Accept metadata the first time it is delivered.
    ///
    /// Returns `false` for repeat deliveries, which are ignored. A duration
    /// that yields no frames is recorded as well: the mapper then skips every
    /// seek.
    pub fn on_metadata(&mut self, meta: VideoMetadata) -> bool {
        if self.timeline.is_some() {
            return false;
        }
        self.timeline = Some(VideoTimeline::new(meta.duration, self.frame_rate));
        self.raster_size = (meta.width > 0 && meta.height > 0).then_some((meta.width, meta.height));
        true
    }

    pub fn timeline(&self) -> Option<VideoTimeline> {
        self.timeline
    }

    pub fn frame_count(&self) -> u32 {
        self.timeline.map(|t| t.frame_count).unwrap_or(0)
    }

    /// Native video resolution used for the off-screen canvas.
    pub fn raster_size(&self) -> Option<(u32, u32)> {
        self.raster_size
    }

    /// Map progress to a frame and decide whether a seek is needed.
    ///
    /// `current_time` is the element's playback position. A seek is requested
    /// only when it differs from the target and the target is not the seek
    /// already in flight.
    pub fn update(&mut self, progress: f64, current_time: f64) -> ScrollyFrame {
        let progress = clamp_progress(progress);
        let frame_index = self.timeline.and_then(|t| t.frame_index(progress));
        let target = match (self.timeline, frame_index) {
            (Some(t), Some(i)) => t.frame_time(i),
            _ => None,
        };
        let seek_to = target.filter(|&t| t != current_time && self.last_seek != Some(t));
        if seek_to.is_some() {
            self.last_seek = seek_to;
        }
        ScrollyFrame {
            progress,
            frame_index,
            seek_to,
            prompt_visible: progress <= 0.0,
            overlay_opacity: overlay_opacity(progress, self.overlay_ramp_start),
        }
    }

    /// Seek to the first frame right after metadata arrives.
    pub fn initial_seek(&mut self) -> Option<f64> {
        let t = self.timeline?.frame_time(0)?;
        self.last_seek = Some(t);
        Some(t)
    }

    /// A seek completed: whether there is a decoded frame worth blitting.
    pub fn on_seeked(&self) -> bool {
        self.frame_count() > 0 && self.raster_size.is_some()
    }
}
