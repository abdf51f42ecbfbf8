// Shared visual/audio tuning constants.

// Ripples
pub const RIPPLE_LIFETIME_MS: f64 = 4500.0;
pub const RIPPLES_PER_CLICK: usize = 3;
pub const RIPPLE_JITTER_PX: f32 = 10.0; // max offset from the click point, per axis
pub const RIPPLE_BASE_RADIUS_MIN: f32 = 900.0;
pub const RIPPLE_BASE_RADIUS_SPAN: f32 = 200.0;
pub const RIPPLE_RADIUS_STEP: f32 = 50.0; // added per burst index
pub const RIPPLE_LINE_WIDTH: f64 = 20.0;
pub const RIPPLE_PEAK_ALPHA: f64 = 0.1;

// Particles
pub const PARTICLE_SPAWN_PROBABILITY: f64 = 0.02; // per frame
pub const PARTICLE_LIFETIME_MS: f64 = 8000.0;
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // px per frame, per axis
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;
pub const PARTICLE_PEAK_ALPHA: f64 = 0.05;

// Background
pub const HUE_MS_PER_DEGREE: f64 = 50.0;
pub const HUE_SECOND_STOP_OFFSET: f64 = 60.0;
pub const BG_SATURATION_PCT: f64 = 50.0;
pub const BG_LIGHTNESS_START_PCT: f64 = 5.0;
pub const BG_LIGHTNESS_END_PCT: f64 = 10.0;
pub const TRAIL_FILL: &str = "rgba(0, 0, 0, 0.05)";

// Chimes
pub const CHIME_FREQUENCIES_HZ: [f32; 7] = [396.0, 417.0, 432.0, 528.0, 639.0, 741.0, 852.0];
pub const HARMONIC_MULTIPLIERS: [f32; 5] = [1.0, 1.25, 1.5, 0.8, 0.67];
pub const HARMONIC_PROBABILITY: f64 = 0.5;
pub const CHIME_PEAK_GAIN: f32 = 0.3;
pub const CHIME_ATTACK_SEC: f64 = 0.1;
pub const CHIME_DURATION_SEC: f64 = 4.5;
pub const CHIME_FLOOR_GAIN: f32 = 0.001; // linear ramp target at the end of the decay
pub const ECHO_DELAY_SEC: f64 = 0.2;
pub const ECHO_GAIN: f32 = 0.1;

// Ambient drone
pub const DRONE_FREQUENCY_HZ: f32 = 55.0;
pub const DRONE_GAIN: f32 = 0.03;

// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const OVERLAY_ID: &str = "start-overlay";
pub const OVERLAY_OK_ID: &str = "overlay-ok";
