use crate::constants::{ORBIT_BREAKPOINTS, ORBIT_RADIUS_WIDE};
use crate::error::ConfigError;
use glam::Vec3;
use std::cmp::Ordering;
use std::f32::consts::TAU;

/// Viewports narrower than `max_width` (CSS px) use `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub max_width: f64,
    pub radius: f32,
}

/// Step function from viewport width to orbit radius.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitBreakpoints {
    steps: Vec<Breakpoint>,
    fallback_radius: f32,
}

impl OrbitBreakpoints {
    /// Steps must be strictly ascending by width; every radius must be
    /// positive and finite.
    pub fn new(steps: Vec<Breakpoint>, fallback_radius: f32) -> Result<Self, ConfigError> {
        check_radius(fallback_radius)?;
        for (i, step) in steps.iter().enumerate() {
            check_radius(step.radius)?;
            let ascending = i == 0
                || step.max_width.partial_cmp(&steps[i - 1].max_width) == Some(Ordering::Greater);
            if !ascending {
                return Err(ConfigError::UnsortedBreakpoints { index: i });
            }
        }
        Ok(Self {
            steps,
            fallback_radius,
        })
    }

    pub fn steps(&self) -> &[Breakpoint] {
        &self.steps
    }

    pub fn fallback_radius(&self) -> f32 {
        self.fallback_radius
    }

    pub fn radius_for_width(&self, width: f64) -> f32 {
        self.steps
            .iter()
            .find(|b| width < b.max_width)
            .map(|b| b.radius)
            .unwrap_or(self.fallback_radius)
    }
}

impl Default for OrbitBreakpoints {
    fn default() -> Self {
        Self {
            steps: ORBIT_BREAKPOINTS
                .iter()
                .map(|&(max_width, radius)| Breakpoint { max_width, radius })
                .collect(),
            fallback_radius: ORBIT_RADIUS_WIDE,
        }
    }
}

fn check_radius(radius: f32) -> Result<(), ConfigError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRadius(radius))
    }
}

/// Angle of item `index` when `count` items share the ring evenly.
#[inline]
pub fn slot_angle(index: usize, count: usize) -> f32 {
    (index as f32 / count.max(1) as f32) * TAU
}

/// Point on the orbit ring (y = 0 in group space).
#[inline]
pub fn orbit_position(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSlot {
    pub angle: f32,
    pub position: Vec3,
}

/// Evenly spaced items on a ring whose radius follows the viewport width.
/// Each item keeps its angle for life; only the radius changes.
#[derive(Debug, Clone)]
pub struct OrbitLayout {
    radius: f32,
    slots: Vec<OrbitSlot>,
    breakpoints: OrbitBreakpoints,
}

impl OrbitLayout {
    pub fn new(
        count: usize,
        breakpoints: OrbitBreakpoints,
        viewport_width: f64,
    ) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::NoOrbitItems);
        }
        let radius = breakpoints.radius_for_width(viewport_width);
        let slots = (0..count)
            .map(|i| {
                let angle = slot_angle(i, count);
                OrbitSlot {
                    angle,
                    position: orbit_position(radius, angle),
                }
            })
            .collect();
        Ok(Self {
            radius,
            slots,
            breakpoints,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[OrbitSlot] {
        &self.slots
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.slots.iter().map(|s| s.position)
    }

    /// Pick the radius for `width` and reposition every item. Returns whether
    /// the radius changed.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        let radius = self.breakpoints.radius_for_width(viewport_width);
        let changed = radius != self.radius;
        if changed {
            log::info!(
                "[orbit] width={:.0} radius {:.1} -> {:.1}",
                viewport_width,
                self.radius,
                radius
            );
        }
        self.set_radius(radius);
        changed
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        for slot in &mut self.slots {
            slot.position = orbit_position(radius, slot.angle);
        }
    }
}
