//! Retargetable, fire-and-forget tweens over a small set of scalar properties.
//!
//! Each animated property owns at most one in-flight tween. A new request on a
//! property that is still animating replaces the old tween, starting from the
//! value reached so far (last request wins, nothing is queued). Properties are
//! independent: advancing one never touches another.

use crate::easing::Easing;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::time::Duration;

/// Scalar property driven by the tween engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    /// Y rotation of the planet group, in radians.
    SceneYaw,
    /// Vertical translation of the heading stack, in CSS px.
    HeadingOffset,
    /// Vertical translation of the paragraph stack, in CSS px.
    ParagraphOffset,
}

/// End value of a tween request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenValue {
    /// Animate to an absolute value.
    To(f32),
    /// Animate by a delta relative to the property's pending target.
    By(f32),
}

/// One interpolation request issued by the transition controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenRequest {
    pub target: TweenTarget,
    pub value: TweenValue,
    pub duration: Duration,
    pub easing: Easing,
}

#[derive(Debug, Clone)]
struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    fn sample(&self) -> f32 {
        let t = self.easing.evaluate(self.progress());
        self.from + (self.to - self.from) * t
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Current values and in-flight tweens, keyed by property.
#[derive(Debug, Clone, Default)]
pub struct TweenSet {
    values: FnvHashMap<TweenTarget, f32>,
    active: FnvHashMap<TweenTarget, Tween>,
}

impl TweenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump a property to `value`, cancelling any tween on it.
    pub fn set(&mut self, target: TweenTarget, value: f32) {
        self.active.remove(&target);
        self.values.insert(target, value);
    }

    /// Value reached so far. Properties never set read as 0.
    pub fn value(&self, target: TweenTarget) -> f32 {
        self.values.get(&target).copied().unwrap_or(0.0)
    }

    /// Value the property is heading to: the in-flight end value, or the
    /// current value when idle.
    pub fn pending_value(&self, target: TweenTarget) -> f32 {
        self.active
            .get(&target)
            .map(|t| t.to)
            .unwrap_or_else(|| self.value(target))
    }

    pub fn is_animating(&self, target: TweenTarget) -> bool {
        self.active.contains_key(&target)
    }

    /// Time left on the in-flight tween, `None` when idle.
    pub fn remaining(&self, target: TweenTarget) -> Option<Duration> {
        self.active
            .get(&target)
            .map(|t| t.duration.saturating_sub(t.elapsed))
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Start (or retarget) a tween. Zero-duration requests apply immediately.
    pub fn request(&mut self, req: TweenRequest) {
        let end = match req.value {
            TweenValue::To(v) => v,
            TweenValue::By(delta) => self.pending_value(req.target) + delta,
        };
        if req.duration.is_zero() {
            self.set(req.target, end);
            return;
        }
        let from = self.value(req.target);
        self.active.insert(
            req.target,
            Tween {
                from,
                to: end,
                elapsed: Duration::ZERO,
                duration: req.duration,
                easing: req.easing,
            },
        );
    }

    /// Advance every in-flight tween by `dt`, returning the properties whose
    /// value changed. Finished tweens land exactly on their end value.
    pub fn advance(&mut self, dt: Duration) -> SmallVec<[TweenTarget; 3]> {
        let mut changed = SmallVec::new();
        for (target, tween) in self.active.iter_mut() {
            tween.elapsed = (tween.elapsed + dt).min(tween.duration);
            let v = if tween.is_done() { tween.to } else { tween.sample() };
            self.values.insert(*target, v);
            changed.push(*target);
        }
        self.active.retain(|_, t| !t.is_done());
        changed
    }
}
