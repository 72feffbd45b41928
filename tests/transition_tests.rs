// Host-side tests for lockstep ring rotation and carousel paging.

use orbit_core::{
    CarouselState, ConfigError, Direction, Easing, LockedHeights, TransitionController,
    TweenTarget, TweenValue,
};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

fn controller(carousel_items: Option<usize>) -> TransitionController {
    TransitionController::new(4, carousel_items, Duration::from_secs(1), Easing::DEFAULT)
        .expect("valid controller")
}

fn heights(heading: f64, paragraph: f64) -> LockedHeights {
    LockedHeights {
        heading: Some(heading),
        paragraph: Some(paragraph),
    }
}

#[test]
fn carousel_wraps_in_both_directions() {
    let mut c = CarouselState::new(3).expect("non-empty");
    assert_eq!(c.step(Direction::Backward), 2);
    assert_eq!(c.step(Direction::Forward), 0);
    assert_eq!(c.step(Direction::Forward), 1);
    assert_eq!(c.step(Direction::Forward), 2);
    assert_eq!(c.step(Direction::Forward), 0);
    assert!(CarouselState::new(0).is_none());
}

#[test]
fn forward_forward_backward_visits_expected_indices() {
    let mut tc = controller(Some(4));
    let locked = heights(48.0, 120.0);
    let indices: Vec<_> = [Direction::Forward, Direction::Forward, Direction::Backward]
        .into_iter()
        .map(|d| tc.transition(d, &locked).index)
        .collect();
    assert_eq!(indices, vec![Some(1), Some(2), Some(1)]);
}

#[test]
fn each_gesture_rotates_one_item_step() {
    let mut tc = controller(None);
    assert!((tc.rotation_step() - FRAC_PI_2).abs() < 1e-6);
    let t = tc.transition(Direction::Forward, &LockedHeights::default());
    let yaw = t.request_for(TweenTarget::SceneYaw).expect("yaw request");
    assert_eq!(yaw.value, TweenValue::By(FRAC_PI_2));
    assert_eq!(yaw.duration, Duration::from_secs(1));
    assert_eq!(yaw.easing, Easing::QuadraticInOut);

    let t = tc.transition(Direction::Backward, &LockedHeights::default());
    let yaw = t.request_for(TweenTarget::SceneYaw).expect("yaw request");
    assert_eq!(yaw.value, TweenValue::By(-FRAC_PI_2));
}

#[test]
fn full_lap_returns_to_starting_yaw() {
    let mut tc = controller(None);
    let total: f32 = (0..4)
        .map(|_| tc.transition(Direction::Forward, &LockedHeights::default()))
        .map(|t| match t.request_for(TweenTarget::SceneYaw).map(|r| r.value) {
            Some(TweenValue::By(d)) => d,
            other => panic!("unexpected yaw request {other:?}"),
        })
        .sum();
    // Four quarter turns land on the start pose, modulo a full turn.
    assert!((total - TAU).abs() < 1e-5);
}

#[test]
fn stack_offsets_target_index_times_height() {
    let mut tc = controller(Some(4));
    let locked = heights(56.0, 130.0);
    tc.transition(Direction::Forward, &locked);
    let t = tc.transition(Direction::Forward, &locked);
    assert_eq!(t.index, Some(2));
    assert_eq!(
        t.request_for(TweenTarget::HeadingOffset).map(|r| r.value),
        Some(TweenValue::To(-112.0))
    );
    assert_eq!(
        t.request_for(TweenTarget::ParagraphOffset).map(|r| r.value),
        Some(TweenValue::To(-260.0))
    );
}

#[test]
fn wrap_back_to_first_item_targets_zero_offset() {
    let mut tc = controller(Some(2));
    let locked = heights(40.0, 90.0);
    tc.transition(Direction::Forward, &locked);
    let t = tc.transition(Direction::Forward, &locked);
    assert_eq!(t.index, Some(0));
    assert_eq!(
        t.request_for(TweenTarget::HeadingOffset).map(|r| r.value),
        Some(TweenValue::To(0.0))
    );
}

#[test]
fn absent_stacks_only_rotate() {
    let mut tc = controller(None);
    let t = tc.transition(Direction::Forward, &heights(40.0, 90.0));
    assert_eq!(t.index, None);
    assert_eq!(t.requests.len(), 1);
    assert!(t.request_for(TweenTarget::SceneYaw).is_some());
}

#[test]
fn unlocked_stack_gets_no_offset_request() {
    let mut tc = controller(Some(3));
    let locked = LockedHeights {
        heading: Some(60.0),
        paragraph: None,
    };
    let t = tc.transition(Direction::Forward, &locked);
    assert!(t.request_for(TweenTarget::HeadingOffset).is_some());
    assert!(t.request_for(TweenTarget::ParagraphOffset).is_none());
}

#[test]
fn zero_orbit_items_is_rejected() {
    let err = TransitionController::new(0, Some(3), Duration::from_secs(1), Easing::DEFAULT)
        .expect_err("no items");
    assert_eq!(err, ConfigError::NoOrbitItems);
}
