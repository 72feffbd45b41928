use crate::constants::*;
use crate::easing::Easing;
use crate::error::ConfigError;
use crate::orbit::OrbitBreakpoints;
use std::time::Duration;

/// Everything a scene needs at construction. `Default` gives the stock
/// four-planet scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub orbit_items: usize,
    pub cooldown: Duration,
    pub transition_duration: Duration,
    pub easing: Easing,
    pub breakpoints: OrbitBreakpoints,
    pub height_buffer_px: f64,
    pub idle_spin_per_frame: f32,
    pub initial_yaw: f32,
    pub tilt: f32,
    pub lift: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            orbit_items: ORBIT_ITEM_COUNT,
            cooldown: Duration::from_millis(GESTURE_COOLDOWN_MS),
            transition_duration: Duration::from_millis(TRANSITION_DURATION_MS),
            easing: Easing::DEFAULT,
            breakpoints: OrbitBreakpoints::default(),
            height_buffer_px: LOCKED_HEIGHT_BUFFER_PX,
            idle_spin_per_frame: IDLE_SPIN_PER_FRAME,
            initial_yaw: INITIAL_YAW,
            tilt: GROUP_TILT,
            lift: GROUP_LIFT,
        }
    }
}

impl SceneConfig {
    pub fn with_orbit_items(mut self, orbit_items: usize) -> Self {
        self.orbit_items = orbit_items;
        self
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: OrbitBreakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.orbit_items == 0 {
            return Err(ConfigError::NoOrbitItems);
        }
        if self.transition_duration.is_zero() {
            return Err(ConfigError::InvalidDuration(self.transition_duration));
        }
        Ok(())
    }
}
