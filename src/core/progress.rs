// Scroll position to normalized progress.
//
// Both presentation mappers read a single scalar in [0, 1] computed here from
// the window scroll offset and the geometry of a reference region. Nothing is
// stored between calls; progress is recomputed on every (coalesced) scroll
// event and once at load so the first frame is correct without scrolling.

/// Geometry sampled from the page at the moment progress is computed.
///
/// All values are CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_y: f64,
    pub container_top: f64,
    pub container_height: f64,
    pub viewport_height: f64,
}

/// How the reference region is derived from the geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProgressMode {
    /// Progress runs over the first `window_fraction` of a viewport height.
    Viewport { window_fraction: f64 },
    /// Progress runs while the container scrolls past the viewport.
    Container,
}

/// Clamp to [0, 1]; NaN becomes 0.
#[inline]
pub fn clamp_progress(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Compute normalized progress for `mode`.
///
/// A region with no scrollable length (container no taller than the viewport,
/// or a zero-height viewport) yields 0 before the region starts and 1 once it
/// has been reached.
pub fn compute_progress(geometry: &ScrollGeometry, mode: ProgressMode) -> f64 {
    let (scrolled, span) = match mode {
        ProgressMode::Viewport { window_fraction } => {
            (geometry.scroll_y, geometry.viewport_height * window_fraction)
        }
        ProgressMode::Container => (
            geometry.scroll_y - geometry.container_top,
            geometry.container_height - geometry.viewport_height,
        ),
    };
    if span.is_nan() || span <= 0.0 {
        return if scrolled >= 0.0 { 1.0 } else { 0.0 };
    }
    clamp_progress(scrolled / span)
}

/// Collapses bursts of scroll events into one computation per animation frame.
///
/// The scroll listener calls [`FrameCoalescer::request`] and schedules a frame
/// callback only when it returns `true`; the callback calls
/// [`FrameCoalescer::take`] before recomputing.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameCoalescer {
    pending: bool,
}

impl FrameCoalescer {
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
