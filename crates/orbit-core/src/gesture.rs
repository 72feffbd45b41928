//! Wheel and swipe gesture detection with a fixed admission cooldown.

use instant::Instant;
use std::time::Duration;

/// Paging direction derived from a gesture delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Positive deltas page forward; negative and zero deltas page backward.
    #[inline]
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    pub direction: Direction,
    pub at: Instant,
}

impl GestureEvent {
    pub fn from_delta(delta: f64, at: Instant) -> Self {
        Self {
            direction: Direction::from_delta(delta),
            at,
        }
    }
}

/// Admits at most one gesture per cooldown window.
#[derive(Debug, Clone)]
pub struct GestureThrottle {
    cooldown: Duration,
    last_accepted: Option<Instant>,
}

impl GestureThrottle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_accepted: None,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn last_accepted(&self) -> Option<Instant> {
        self.last_accepted
    }

    /// Returns `true` and records `at` when the cooldown since the last
    /// accepted gesture has elapsed. Rejections leave the state untouched.
    pub fn admit(&mut self, at: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if at < last + self.cooldown {
                return false;
            }
        }
        self.last_accepted = Some(at);
        true
    }

    /// Throttle-check a gesture and pass its direction through when admitted.
    pub fn dispatch(&mut self, event: GestureEvent) -> Option<Direction> {
        if self.admit(event.at) {
            log::debug!("[gesture] accepted {:?}", event.direction);
            Some(event.direction)
        } else {
            log::debug!("[gesture] dropped {:?} (cooldown)", event.direction);
            None
        }
    }
}

/// Vertical swipe tracking between touch start and touch end.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_y: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    pub fn is_tracking(&self) -> bool {
        self.start_y.is_some()
    }

    /// Finish the swipe and return `start_y - end_y`. A missing end coordinate
    /// counts as no movement. Returns `None` if no swipe was started.
    pub fn finish(&mut self, end_y: Option<f64>) -> Option<f64> {
        let start = self.start_y.take()?;
        Some(start - end_y.unwrap_or(start))
    }
}

/// Turns raw wheel/touch input into admitted paging directions.
#[derive(Debug, Clone)]
pub struct GestureDispatcher {
    throttle: GestureThrottle,
    swipe: SwipeTracker,
}

impl GestureDispatcher {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            throttle: GestureThrottle::new(cooldown),
            swipe: SwipeTracker::default(),
        }
    }

    pub fn throttle(&self) -> &GestureThrottle {
        &self.throttle
    }

    pub fn swipe(&self) -> &SwipeTracker {
        &self.swipe
    }

    pub fn on_wheel(&mut self, delta_y: f64, at: Instant) -> Option<Direction> {
        self.throttle.dispatch(GestureEvent::from_delta(delta_y, at))
    }

    /// Record the first touch point; events without touches are ignored.
    pub fn on_touch_start(&mut self, y: Option<f64>) {
        if let Some(y) = y {
            self.swipe.begin(y);
        }
    }

    pub fn on_touch_end(&mut self, end_y: Option<f64>, at: Instant) -> Option<Direction> {
        let delta = self.swipe.finish(end_y)?;
        self.throttle.dispatch(GestureEvent::from_delta(delta, at))
    }
}
