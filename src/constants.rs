// Rendering and page wiring constants for the web frontend. Scene behavior is
// tuned in `orbit_core::constants`.

// DOM element ids
pub const CANVAS_ID: &str = "canvas";
pub const HEADING_VIEWPORT_ID: &str = "titleViewport";
pub const HEADING_STACK_ID: &str = "titleStack";
pub const PARAGRAPH_VIEWPORT_ID: &str = "paraViewport";
pub const PARAGRAPH_STACK_ID: &str = "paraStack";

// Surface sizing
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Camera
pub const CAMERA_Z: f32 = 9.0;
pub const CAMERA_FOVY_DEG: f32 = 25.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_INTENSITY: f32 = 1.6;
pub const DIRECTIONAL_POSITION: [f32; 3] = [2.0, 2.0, 5.0];

// Tone mapping and background
pub const TONE_MAPPING_EXPOSURE: f32 = 2.2;
pub const BACKGROUND_INTENSITY: f32 = 1.6;
pub const STAR_DENSITY: f32 = 0.035; // fraction of background cells holding a star

// Planet surfaces
pub const PLANET_SURFACE_SEED: u64 = 42;
pub const PLANET_ROUGHNESS: f32 = 0.6;
pub const PLANET_METALNESS: f32 = 0.1;

// Clamp for frame delta so a backgrounded tab does not finish tweens in one jump
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
