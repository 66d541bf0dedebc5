// Scroll-driven pose for the hero model and its companion content panel.
//
// The mapper owns no scene objects. It turns progress (and elapsed time, for
// the idle bob) into a [`HeroPose`] that the renderer converts to a model
// matrix, and into a [`ContentReveal`] that the DOM layer writes as styles.

use super::constants::*;
use super::easing::{lerp_span, Easing};
use super::progress::{clamp_progress, compute_progress, ProgressMode, ScrollGeometry};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Fixed animation path: start values and the span covered at full progress.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroAnimation {
    pub easing: Easing,
    pub start: Vec3,
    pub travel: Vec3,
    pub start_yaw: f32,
    pub yaw_span: f32,
    pub start_pitch: f32,
    pub pitch_span: f32,
    pub scale: f32,
}

impl Default for HeroAnimation {
    fn default() -> Self {
        Self {
            easing: Easing::CubicOut,
            start: Vec3::new(HERO_START_X, HERO_BASE_Y, HERO_START_Z),
            travel: Vec3::new(HERO_TRAVEL_X, HERO_TRAVEL_Y, HERO_TRAVEL_Z),
            start_yaw: HERO_START_YAW,
            yaw_span: HERO_YAW_SPAN,
            start_pitch: HERO_START_PITCH,
            pitch_span: HERO_PITCH_SPAN,
            scale: HERO_MODEL_SCALE,
        }
    }
}

/// Position and rotation of the model in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl HeroPose {
    /// Translation * rotation (pitch about X, then yaw about Y) * uniform scale.
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0);
        Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, self.position)
    }
}

/// Windowed fade/slide for the text panel that accompanies the hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealWindow {
    pub threshold: f64,
    pub duration: f64,
    pub offset_px: f64,
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            duration: REVEAL_DURATION,
            offset_px: REVEAL_OFFSET_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentReveal {
    pub opacity: f64,
    pub translate_y: f64,
}

impl RevealWindow {
    pub fn at(&self, eased: f64) -> ContentReveal {
        let opacity = if self.duration > 0.0 {
            clamp_progress((eased - self.threshold) / self.duration)
        } else if eased >= self.threshold {
            1.0
        } else {
            0.0
        };
        ContentReveal {
            opacity,
            translate_y: self.offset_px * (1.0 - opacity),
        }
    }
}

/// Small sinusoidal height offset applied every animation tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleBob {
    pub amplitude: f32,
    pub omega: f32,
}

impl Default for IdleBob {
    fn default() -> Self {
        Self {
            amplitude: IDLE_BOB_AMPLITUDE,
            omega: IDLE_BOB_OMEGA,
        }
    }
}

impl IdleBob {
    #[inline]
    pub fn offset(&self, elapsed_sec: f64) -> f32 {
        self.amplitude * (self.omega as f64 * elapsed_sec).sin() as f32
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModelStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Output of a scroll update: the scroll-driven pose and the panel reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub pose: HeroPose,
    pub reveal: ContentReveal,
}

pub struct HeroTransformMapper {
    pub animation: HeroAnimation,
    pub reveal: RevealWindow,
    pub bob: IdleBob,
    pub mode: ProgressMode,
    status: ModelStatus,
    scroll_pose: HeroPose,
}

impl Default for HeroTransformMapper {
    fn default() -> Self {
        Self::new(
            HeroAnimation::default(),
            RevealWindow::default(),
            IdleBob::default(),
            ProgressMode::Viewport {
                window_fraction: HERO_WINDOW_FRACTION,
            },
        )
    }
}

impl HeroTransformMapper {
    pub fn new(
        animation: HeroAnimation,
        reveal: RevealWindow,
        bob: IdleBob,
        mode: ProgressMode,
    ) -> Self {
        let scroll_pose = pose_at(&animation, 0.0);
        Self {
            animation,
            reveal,
            bob,
            mode,
            status: ModelStatus::Loading,
            scroll_pose,
        }
    }

    pub fn status(&self) -> &ModelStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == ModelStatus::Ready
    }

    /// Transition `Loading -> Ready`. Returns `false` if a result was already delivered.
    pub fn mark_ready(&mut self) -> bool {
        if self.status != ModelStatus::Loading {
            return false;
        }
        self.status = ModelStatus::Ready;
        true
    }

    /// Transition `Loading -> Failed`. The mapper stays inactive from then on.
    pub fn mark_failed(&mut self, reason: impl Into<String>) -> bool {
        if self.status != ModelStatus::Loading {
            return false;
        }
        self.status = ModelStatus::Failed(reason.into());
        true
    }

    pub fn progress(&self, geometry: &ScrollGeometry) -> f64 {
        compute_progress(geometry, self.mode)
    }

    /// Eased progress for raw progress `p`; values outside [0, 1] saturate.
    pub fn eased(&self, p: f64) -> f64 {
        self.animation.easing.apply(clamp_progress(p))
    }

    /// Pure scroll-driven pose, independent of readiness.
    pub fn pose_for(&self, p: f64) -> HeroPose {
        pose_at(&self.animation, self.eased(p))
    }

    pub fn reveal_for(&self, p: f64) -> ContentReveal {
        self.reveal.at(self.eased(p))
    }

    /// Recompute the scroll-driven pose. No-op until the model is ready.
    pub fn on_scroll(&mut self, p: f64) -> Option<HeroFrame> {
        if !self.is_ready() {
            return None;
        }
        self.scroll_pose = self.pose_for(p);
        Some(HeroFrame {
            pose: self.scroll_pose,
            reveal: self.reveal_for(p),
        })
    }

    /// Scroll-driven pose with the idle bob added to its height.
    pub fn on_tick(&self, elapsed_sec: f64) -> Option<HeroPose> {
        if !self.is_ready() {
            return None;
        }
        Some(compose_bob(self.scroll_pose, &self.bob, elapsed_sec))
    }

    pub fn scroll_pose(&self) -> HeroPose {
        self.scroll_pose
    }
}

fn pose_at(animation: &HeroAnimation, eased: f64) -> HeroPose {
    let HeroAnimation { start, travel, .. } = animation;
    HeroPose {
        position: Vec3::new(
            lerp_span(start.x, travel.x, eased),
            lerp_span(start.y, travel.y, eased),
            lerp_span(start.z, travel.z, eased),
        ),
        yaw: lerp_span(animation.start_yaw, animation.yaw_span, eased),
        pitch: lerp_span(animation.start_pitch, animation.pitch_span, eased),
    }
}

/// Layer the bob on top of `base`: y = base.y + A * sin(w * t).
#[inline]
pub fn compose_bob(base: HeroPose, bob: &IdleBob, elapsed_sec: f64) -> HeroPose {
    let mut pose = base;
    pose.position.y += bob.offset(elapsed_sec);
    pose
}
