pub use orbit_core::*;

pub use orbit_core::constants::{PLANET_RADIUS, PLANET_SEGMENTS};
pub use orbit_core::mesh::{uv_sphere, MeshVertex};
pub use orbit_core::planets::{planet_styles, PlanetStyle};

// Shaders bundled as string constants
pub static PLANETS_WGSL: &str = include_str!("../../shaders/planets.wgsl");
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
