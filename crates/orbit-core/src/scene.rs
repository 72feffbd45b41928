//! Scene controller: one object owning the gesture throttle, orbit layout,
//! carousel and tweens for a single scene instance.

use crate::config::SceneConfig;
use crate::error::ConfigError;
use crate::gesture::{Direction, GestureDispatcher};
use crate::orbit::OrbitLayout;
use crate::transition::{Transition, TransitionController};
use crate::tween::{TweenRequest, TweenSet, TweenTarget, TweenValue};
use crate::viewport::{LockedHeights, TextStack, ViewPresenter, ViewportNormalizer};
use glam::{Mat4, Quat, Vec3};
use instant::Instant;
use smallvec::SmallVec;
use std::time::Duration;

/// Per-frame read-out consumed by the renderer and the DOM presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub yaw: f32,
    pub tilt: f32,
    pub lift: f32,
    pub spin: f32,
    pub radius: f32,
    pub positions: Vec<Vec3>,
    pub heading_offset: f32,
    pub paragraph_offset: f32,
}

impl SceneSnapshot {
    /// Group transform: lift, then tilt about X, then yaw about Y.
    pub fn group_transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.lift, 0.0))
            * Mat4::from_rotation_x(self.tilt)
            * Mat4::from_rotation_y(self.yaw)
    }

    /// World transform of every planet, including its idle spin.
    pub fn planet_transforms(&self, planet_radius: f32) -> Vec<Mat4> {
        let group = self.group_transform();
        self.positions
            .iter()
            .map(|p| {
                group
                    * Mat4::from_scale_rotation_translation(
                        Vec3::splat(planet_radius),
                        Quat::from_rotation_y(self.spin),
                        *p,
                    )
            })
            .collect()
    }
}

pub struct SceneController {
    config: SceneConfig,
    gestures: GestureDispatcher,
    orbit: OrbitLayout,
    transitions: TransitionController,
    normalizer: ViewportNormalizer,
    locked: LockedHeights,
    tweens: TweenSet,
    spin: f32,
}

impl SceneController {
    /// `carousel_items` is the number of heading/paragraph pairs, `None` when
    /// the page has no text stacks.
    pub fn new(
        config: SceneConfig,
        carousel_items: Option<usize>,
        viewport_width: f64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let orbit = OrbitLayout::new(
            config.orbit_items,
            config.breakpoints.clone(),
            viewport_width,
        )?;
        let transitions = TransitionController::new(
            config.orbit_items,
            carousel_items,
            config.transition_duration,
            config.easing,
        )?;
        let mut tweens = TweenSet::new();
        tweens.set(TweenTarget::SceneYaw, config.initial_yaw);
        tweens.set(TweenTarget::HeadingOffset, 0.0);
        tweens.set(TweenTarget::ParagraphOffset, 0.0);
        log::info!(
            "[scene] items={} carousel={:?} radius={:.1}",
            config.orbit_items,
            carousel_items,
            orbit.radius()
        );
        Ok(Self {
            gestures: GestureDispatcher::new(config.cooldown),
            normalizer: ViewportNormalizer::new(config.height_buffer_px),
            config,
            orbit,
            transitions,
            locked: LockedHeights::default(),
            tweens,
            spin: 0.0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn orbit(&self) -> &OrbitLayout {
        &self.orbit
    }

    pub fn gestures(&self) -> &GestureDispatcher {
        &self.gestures
    }

    pub fn transitions(&self) -> &TransitionController {
        &self.transitions
    }

    pub fn tweens(&self) -> &TweenSet {
        &self.tweens
    }

    pub fn locked_heights(&self) -> LockedHeights {
        self.locked
    }

    pub fn carousel_index(&self) -> Option<usize> {
        self.transitions.carousel().map(|c| c.index())
    }

    /// Yaw the group is heading to once in-flight tweens finish.
    pub fn target_yaw(&self) -> f32 {
        self.tweens.pending_value(TweenTarget::SceneYaw)
    }

    pub fn on_wheel(&mut self, delta_y: f64, at: Instant) -> Option<Transition> {
        let direction = self.gestures.on_wheel(delta_y, at)?;
        Some(self.on_gesture(direction))
    }

    pub fn on_touch_start(&mut self, y: Option<f64>) {
        self.gestures.on_touch_start(y);
    }

    pub fn on_touch_end(&mut self, end_y: Option<f64>, at: Instant) -> Option<Transition> {
        let direction = self.gestures.on_touch_end(end_y, at)?;
        Some(self.on_gesture(direction))
    }

    /// Advance ring and carousel by one step without consulting the throttle.
    pub fn on_gesture(&mut self, direction: Direction) -> Transition {
        let transition = self.transitions.transition(direction, &self.locked);
        for req in &transition.requests {
            self.tweens.request(*req);
        }
        transition
    }

    /// Returns whether the orbit radius changed.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        self.orbit.on_resize(viewport_width)
    }

    /// Re-measure both text stacks and align their offsets to the current
    /// index under the new heights. Idle stacks snap; stacks mid-transition
    /// are retargeted and finish on the original schedule.
    pub fn normalize_viewports<P: ViewPresenter + ?Sized>(&mut self, presenter: &mut P) -> LockedHeights {
        self.locked = self.normalizer.normalize(presenter);
        if let Some(index) = self.carousel_index() {
            for (stack, target) in [
                (TextStack::Heading, TweenTarget::HeadingOffset),
                (TextStack::Paragraph, TweenTarget::ParagraphOffset),
            ] {
                let Some(height) = self.locked.get(stack) else {
                    continue;
                };
                let offset = (-(index as f64) * height) as f32;
                match self.tweens.remaining(target) {
                    Some(remaining) => self.tweens.request(TweenRequest {
                        target,
                        value: TweenValue::To(offset),
                        duration: remaining,
                        easing: self.config.easing,
                    }),
                    None => {
                        self.tweens.set(target, offset);
                        presenter.translate(stack, offset);
                    }
                }
            }
        }
        self.locked
    }

    /// One animation frame: advance tweens by `dt` and the idle spin by a
    /// fixed step. Returns the tweened properties that moved.
    pub fn tick(&mut self, dt: Duration) -> SmallVec<[TweenTarget; 3]> {
        self.spin += self.config.idle_spin_per_frame;
        self.tweens.advance(dt)
    }

    /// Push the current stack offsets to the presenter.
    pub fn apply_text_offsets<P: ViewPresenter + ?Sized>(&self, presenter: &mut P) {
        presenter.translate(
            TextStack::Heading,
            self.tweens.value(TweenTarget::HeadingOffset),
        );
        presenter.translate(
            TextStack::Paragraph,
            self.tweens.value(TweenTarget::ParagraphOffset),
        );
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            yaw: self.tweens.value(TweenTarget::SceneYaw),
            tilt: self.config.tilt,
            lift: self.config.lift,
            spin: self.spin,
            radius: self.orbit.radius(),
            positions: self.orbit.positions().collect(),
            heading_offset: self.tweens.value(TweenTarget::HeadingOffset),
            paragraph_offset: self.tweens.value(TweenTarget::ParagraphOffset),
        }
    }
}
