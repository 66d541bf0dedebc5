// Scroll-animation tuning constants shared by the hero and scrollytelling mappers.

// Hero windowing: fraction of the viewport height the hero animation spans.
// 1.0 animates across the whole first screen; 0.8 finishes a little earlier.
pub const HERO_WINDOW_FRACTION: f64 = 1.0;

// Hero model path (world units)
pub const HERO_START_X: f32 = -20.0; // enters from the left
pub const HERO_TRAVEL_X: f32 = 40.0; // ...and crosses the screen
pub const HERO_BASE_Y: f32 = -7.0;
pub const HERO_TRAVEL_Y: f32 = 0.0;
pub const HERO_START_Z: f32 = -5.0;
pub const HERO_TRAVEL_Z: f32 = 5.0; // drifts slightly forward

// Hero model rotation (radians)
pub const HERO_START_YAW: f32 = -std::f32::consts::FRAC_PI_4;
pub const HERO_YAW_SPAN: f32 = std::f32::consts::PI * 1.5; // 270 degrees
pub const HERO_START_PITCH: f32 = 0.0;
pub const HERO_PITCH_SPAN: f32 = std::f32::consts::PI / 8.0; // slight tilt

pub const HERO_MODEL_SCALE: f32 = 12.0;

// Idle bob layered on top of the scroll-driven height
pub const IDLE_BOB_AMPLITUDE: f32 = 0.2;
pub const IDLE_BOB_OMEGA: f32 = 0.5; // rad/s

// Hero content panel reveal (fractions of eased progress, offset in CSS px)
pub const REVEAL_THRESHOLD: f64 = 0.4;
pub const REVEAL_DURATION: f64 = 0.4;
pub const REVEAL_OFFSET_PX: f64 = 40.0;

// Scrollytelling
pub const ASSUMED_FRAME_RATE: f64 = 30.0;
pub const OVERLAY_RAMP_START: f64 = 0.8; // text overlay fades in over the last 20%
