//! Lockstep advance of the planet ring and the text carousel.

use crate::easing::Easing;
use crate::error::ConfigError;
use crate::gesture::Direction;
use crate::tween::{TweenRequest, TweenTarget, TweenValue};
use crate::viewport::{LockedHeights, TextStack};
use smallvec::SmallVec;
use std::f32::consts::TAU;
use std::time::Duration;

/// Index of the heading/paragraph pair on display. Wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    count: usize,
}

impl CarouselState {
    /// `None` for an empty carousel.
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { index: 0, count })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn step(&mut self, direction: Direction) -> usize {
        let count = self.count as i64;
        let next = (self.index as i64 + direction.sign() as i64 + count) % count;
        self.index = next as usize;
        self.index
    }
}

/// Requests issued for one accepted gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub direction: Direction,
    /// Carousel index after the step, if there is a carousel.
    pub index: Option<usize>,
    pub requests: SmallVec<[TweenRequest; 3]>,
}

impl Transition {
    pub fn request_for(&self, target: TweenTarget) -> Option<&TweenRequest> {
        self.requests.iter().find(|r| r.target == target)
    }
}

#[derive(Debug, Clone)]
pub struct TransitionController {
    rotation_step: f32,
    duration: Duration,
    easing: Easing,
    carousel: Option<CarouselState>,
}

impl TransitionController {
    pub fn new(
        orbit_items: usize,
        carousel_items: Option<usize>,
        duration: Duration,
        easing: Easing,
    ) -> Result<Self, ConfigError> {
        if orbit_items == 0 {
            return Err(ConfigError::NoOrbitItems);
        }
        Ok(Self {
            rotation_step: TAU / orbit_items as f32,
            duration,
            easing,
            carousel: carousel_items.and_then(CarouselState::new),
        })
    }

    /// Yaw advanced per gesture: one full item-to-item turn.
    pub fn rotation_step(&self) -> f32 {
        self.rotation_step
    }

    pub fn carousel(&self) -> Option<&CarouselState> {
        self.carousel.as_ref()
    }

    /// Step the carousel and build the yaw and stack offset requests. Stacks
    /// without a locked height get no request.
    pub fn transition(&mut self, direction: Direction, locked: &LockedHeights) -> Transition {
        let mut requests = SmallVec::new();
        requests.push(self.request(
            TweenTarget::SceneYaw,
            TweenValue::By(direction.sign() as f32 * self.rotation_step),
        ));

        let index = self.carousel.as_mut().map(|c| c.step(direction));
        if let Some(index) = index {
            for (stack, target) in [
                (TextStack::Heading, TweenTarget::HeadingOffset),
                (TextStack::Paragraph, TweenTarget::ParagraphOffset),
            ] {
                if let Some(height) = locked.get(stack) {
                    let offset = -(index as f64) * height;
                    requests.push(self.request(target, TweenValue::To(offset as f32)));
                }
            }
        }

        Transition {
            direction,
            index,
            requests,
        }
    }

    fn request(&self, target: TweenTarget, value: TweenValue) -> TweenRequest {
        TweenRequest {
            target,
            value,
            duration: self.duration,
            easing: self.easing,
        }
    }
}
