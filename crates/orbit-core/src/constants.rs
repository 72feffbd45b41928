use std::f32::consts::FRAC_PI_2;

// Scene tuning shared by the controller and the web frontend.

// Orbit
pub const ORBIT_ITEM_COUNT: usize = 4; // earth, venus, volcanic, csilla
pub const ORBIT_RADIUS_WIDE: f32 = 4.5; // radius for viewports >= the last breakpoint

// Responsive radius steps: (exclusive max viewport width in CSS px, radius)
pub const ORBIT_BREAKPOINTS: [(f64, f32); 3] = [(480.0, 3.2), (768.0, 3.8), (1024.0, 4.2)];

// Gestures
pub const GESTURE_COOLDOWN_MS: u64 = 2000;
pub const TRANSITION_DURATION_MS: u64 = 1000;

// Text carousel
pub const LOCKED_HEIGHT_BUFFER_PX: f64 = 8.0;

// Planet group pose
pub const INITIAL_YAW: f32 = -FRAC_PI_2; // first planet faces the camera
pub const GROUP_TILT: f32 = 0.1;
pub const GROUP_LIFT: f32 = -0.8;
pub const IDLE_SPIN_PER_FRAME: f32 = 0.0025; // radians, applied to each planet

// Planet geometry
pub const PLANET_RADIUS: f32 = 1.3;
pub const PLANET_SEGMENTS: u32 = 64;
