// Host-side tests for the scene controller: gestures in, tweens and snapshots out.

use instant::Instant;
use orbit_core::constants::{IDLE_SPIN_PER_FRAME, INITIAL_YAW};
use orbit_core::{
    Breakpoint, ConfigError, Direction, OrbitBreakpoints, SceneConfig, SceneController,
    StyleProp, StyleTarget, TextStack, TweenTarget, ViewPresenter,
};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

/// Fixed item heights; records every translation.
struct FakePage {
    heading: Vec<f64>,
    paragraph: Vec<f64>,
    translations: Vec<(TextStack, f32)>,
}

impl FakePage {
    fn new() -> Self {
        Self {
            heading: vec![40.0, 52.0, 48.0],
            paragraph: vec![100.0, 120.0, 90.0],
            translations: Vec::new(),
        }
    }

    fn last_translation(&self, stack: TextStack) -> Option<f32> {
        self.translations
            .iter()
            .rev()
            .find(|(s, _)| *s == stack)
            .map(|(_, y)| *y)
    }
}

impl ViewPresenter for FakePage {
    fn item_count(&self, stack: TextStack) -> Option<usize> {
        Some(self.measure_items(stack).len())
    }

    fn measure_items(&self, stack: TextStack) -> Vec<f64> {
        match stack {
            TextStack::Heading => self.heading.clone(),
            TextStack::Paragraph => self.paragraph.clone(),
        }
    }

    fn set_style(&mut self, _target: StyleTarget, _props: &[StyleProp]) {}

    fn translate(&mut self, stack: TextStack, offset_px: f32) {
        self.translations.push((stack, offset_px));
    }
}

fn scene(carousel_items: Option<usize>) -> SceneController {
    SceneController::new(SceneConfig::default(), carousel_items, 1200.0).expect("valid scene")
}

#[test]
fn initial_snapshot_faces_first_planet() {
    let s = scene(Some(3));
    let snap = s.snapshot();
    assert_eq!(snap.yaw, INITIAL_YAW);
    assert_eq!(snap.radius, 4.5);
    assert_eq!(snap.positions.len(), 4);
    assert_eq!(snap.heading_offset, 0.0);
    assert_eq!(snap.paragraph_offset, 0.0);
    assert_eq!(s.carousel_index(), Some(0));
}

#[test]
fn idle_spin_advances_every_frame() {
    let mut s = scene(None);
    for _ in 0..10 {
        let moved = s.tick(Duration::from_millis(16));
        assert!(moved.is_empty());
    }
    assert!((s.snapshot().spin - 10.0 * IDLE_SPIN_PER_FRAME).abs() < 1e-6);
}

#[test]
fn wheel_rotates_ring_one_step_over_the_transition() {
    let mut s = scene(Some(3));
    let t = s.on_wheel(100.0, Instant::now()).expect("first gesture admitted");
    assert_eq!(t.direction, Direction::Forward);
    assert_eq!(t.index, Some(1));
    assert!((s.target_yaw() - (INITIAL_YAW + FRAC_PI_2)).abs() < 1e-6);

    s.tick(Duration::from_millis(500));
    let mid = s.snapshot().yaw;
    assert!(mid > INITIAL_YAW && mid < INITIAL_YAW + FRAC_PI_2);

    s.tick(Duration::from_millis(600));
    assert!((s.snapshot().yaw - (INITIAL_YAW + FRAC_PI_2)).abs() < 1e-6);
    assert!(s.tweens().is_idle());
}

#[test]
fn gestures_inside_cooldown_change_nothing() {
    let mut s = scene(Some(3));
    let t0 = Instant::now();
    assert!(s.on_wheel(100.0, t0).is_some());
    assert!(s.on_wheel(100.0, t0 + Duration::from_millis(300)).is_none());
    s.on_touch_start(Some(500.0));
    assert!(s
        .on_touch_end(Some(200.0), t0 + Duration::from_millis(1500))
        .is_none());
    assert_eq!(s.carousel_index(), Some(1));
    assert!((s.target_yaw() - (INITIAL_YAW + FRAC_PI_2)).abs() < 1e-6);

    let t = s
        .on_wheel(-20.0, t0 + Duration::from_millis(2000))
        .expect("cooldown elapsed");
    assert_eq!(t.index, Some(0));
}

#[test]
fn swipe_down_pages_backward() {
    let mut s = scene(Some(3));
    s.on_touch_start(Some(200.0));
    let t = s
        .on_touch_end(Some(450.0), Instant::now())
        .expect("first gesture admitted");
    assert_eq!(t.direction, Direction::Backward);
    assert_eq!(t.index, Some(2));
}

#[test]
fn text_stacks_page_by_locked_height() {
    let mut s = scene(Some(3));
    let mut page = FakePage::new();
    let locked = s.normalize_viewports(&mut page);
    assert_eq!(locked.heading, Some(60.0));
    assert_eq!(locked.paragraph, Some(128.0));
    assert_eq!(page.last_translation(TextStack::Heading), Some(0.0));

    s.on_gesture(Direction::Forward);
    s.on_gesture(Direction::Forward);
    s.tick(Duration::from_secs(2));
    s.apply_text_offsets(&mut page);
    assert_eq!(page.last_translation(TextStack::Heading), Some(-120.0));
    assert_eq!(page.last_translation(TextStack::Paragraph), Some(-256.0));
    assert_eq!(s.carousel_index(), Some(2));
}

#[test]
fn renormalize_snaps_offsets_to_new_heights() {
    let mut s = scene(Some(3));
    let mut page = FakePage::new();
    s.normalize_viewports(&mut page);
    s.on_gesture(Direction::Forward);
    s.tick(Duration::from_secs(2));

    // Fonts land and the tallest heading shrinks.
    page.heading = vec![30.0, 36.0, 32.0];
    s.normalize_viewports(&mut page);
    assert_eq!(page.last_translation(TextStack::Heading), Some(-44.0));
    assert_eq!(s.snapshot().heading_offset, -44.0);
}

#[test]
fn resize_moves_planets_onto_new_radius() {
    let mut s = scene(None);
    assert!(s.on_resize(600.0));
    let snap = s.snapshot();
    assert_eq!(snap.radius, 3.8);
    for p in &snap.positions {
        assert!((p.length() - 3.8).abs() < 1e-4);
    }
    assert!(!s.on_resize(700.0));
}

#[test]
fn planet_transforms_place_planets_in_group_space() {
    let s = scene(None);
    let snap = s.snapshot();
    let group = snap.group_transform();
    let transforms = snap.planet_transforms(1.3);
    assert_eq!(transforms.len(), snap.positions.len());
    for (m, p) in transforms.iter().zip(&snap.positions) {
        let center = m.transform_point3(glam::Vec3::ZERO);
        assert!((center - group.transform_point3(*p)).length() < 1e-4);
    }
}

#[test]
fn invalid_configs_are_rejected() {
    let err = SceneController::new(SceneConfig::default().with_orbit_items(0), None, 800.0)
        .err()
        .expect("zero items");
    assert_eq!(err, ConfigError::NoOrbitItems);

    let config = SceneConfig {
        transition_duration: Duration::ZERO,
        ..SceneConfig::default()
    };
    let err = SceneController::new(config, None, 800.0)
        .err()
        .expect("zero duration");
    assert_eq!(err, ConfigError::InvalidDuration(Duration::ZERO));
}

#[test]
fn custom_cooldown_is_honored() {
    let config = SceneConfig::default().with_cooldown(Duration::from_millis(100));
    let mut s = SceneController::new(config, None, 800.0).expect("valid scene");
    let t0 = Instant::now();
    assert!(s.on_wheel(1.0, t0).is_some());
    assert!(s.on_wheel(1.0, t0 + Duration::from_millis(150)).is_some());
    assert!((s.target_yaw() - (INITIAL_YAW + 2.0 * FRAC_PI_2)).abs() < 1e-5);
}

#[test]
fn renormalize_mid_transition_retargets_offsets() {
    let mut s = scene(Some(3));
    let mut page = FakePage::new();
    s.normalize_viewports(&mut page);
    s.on_gesture(Direction::Forward);
    s.tick(Duration::from_millis(500));

    // Fonts land while the stack is still sliding towards -60.
    page.heading = vec![30.0, 36.0, 32.0];
    let locked = s.normalize_viewports(&mut page);
    assert_eq!(locked.heading, Some(44.0));
    assert!(s.tweens().is_animating(TweenTarget::HeadingOffset));
    assert_eq!(s.tweens().pending_value(TweenTarget::HeadingOffset), -44.0);

    // The retarget keeps the original schedule.
    s.tick(Duration::from_millis(500));
    assert_eq!(s.snapshot().heading_offset, -44.0);
    assert!(s.tweens().is_idle());
}

#[test]
fn custom_breakpoints_drive_the_ring_radius() {
    let breakpoints = OrbitBreakpoints::new(
        vec![
            Breakpoint {
                max_width: 500.0,
                radius: 2.5,
            },
            Breakpoint {
                max_width: 900.0,
                radius: 3.5,
            },
        ],
        5.0,
    )
    .expect("valid breakpoints");
    let config = SceneConfig::default().with_breakpoints(breakpoints);
    let mut s = SceneController::new(config, None, 320.0).expect("valid scene");
    assert_eq!(s.snapshot().radius, 2.5);
    assert!(s.on_resize(700.0));
    assert_eq!(s.snapshot().radius, 3.5);
    assert!(s.on_resize(1400.0));
    assert_eq!(s.snapshot().radius, 5.0);
}

#[test]
fn four_gestures_bring_the_ring_back_to_its_start_pose() {
    let mut s = scene(Some(3));
    let t0 = Instant::now();
    for i in 0..4u32 {
        let at = t0 + Duration::from_millis(2000) * i;
        assert!(s.on_wheel(50.0, at).is_some(), "gesture {i} admitted");
        s.tick(Duration::from_millis(1100));
        assert!(s.tweens().is_idle());
    }
    let turned = s.snapshot().yaw - INITIAL_YAW;
    let wrapped = turned.rem_euclid(TAU);
    assert!(wrapped < 1e-4 || TAU - wrapped < 1e-4, "yaw off by {wrapped}");
    assert_eq!(s.carousel_index(), Some(1));
}
