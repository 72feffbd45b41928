// Host-side tests for the perspective camera used by the planet pass.

use glam::Vec3;
use orbit_core::Camera;

fn camera() -> Camera {
    Camera::facing_origin(9.0, 25.0, 0.1, 100.0)
}

#[test]
fn origin_projects_to_screen_center() {
    let mut cam = camera();
    cam.set_viewport(1600, 900);
    let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!((0.0..=1.0).contains(&ndc.z));
}

#[test]
fn nearer_points_have_smaller_depth() {
    let cam = camera();
    let vp = cam.view_projection();
    let depth = |z: f32| {
        let c = vp * Vec3::new(0.0, 0.0, z).extend(1.0);
        c.z / c.w
    };
    assert!(depth(4.0) < depth(0.0));
    assert!(depth(0.0) < depth(-4.0));
}

#[test]
fn degenerate_viewport_keeps_previous_aspect() {
    let mut cam = camera();
    cam.set_viewport(800, 400);
    assert_eq!(cam.aspect, 2.0);
    cam.set_viewport(0, 400);
    assert_eq!(cam.aspect, 2.0);
}

#[test]
fn front_planet_is_in_frame() {
    let mut cam = camera();
    cam.set_viewport(1920, 1080);
    // Planet facing the camera on the widest ring, lowered with the group.
    let clip = cam.view_projection() * Vec3::new(0.0, -0.8, 4.5).extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
    assert!((0.0..=1.0).contains(&ndc.z));
}
