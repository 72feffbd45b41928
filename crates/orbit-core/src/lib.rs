pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod gesture;
pub mod mesh;
pub mod orbit;
pub mod planets;
pub mod scene;
pub mod state;
pub mod transition;
pub mod tween;
pub mod viewport;

pub use config::*;
pub use easing::*;
pub use error::*;
pub use gesture::*;
pub use orbit::*;
pub use scene::*;
pub use state::*;
pub use transition::*;
pub use tween::*;
pub use viewport::*;
