use viewer_selection::{CameraTransform, Gesture, Roi2d, Roi3d, SelectionEvent, glam::*};

use crate::common::{TestSurface, given};

fn roi_3d(event: &SelectionEvent, transform: &CameraTransform) -> Roi3d {
    let roi_2d = Gesture::from_event(event)
        .expect("gesture")
        .to_roi_2d()
        .expect("roi 2d");
    Roi3d::new(roi_2d, transform).expect("roi 3d")
}

#[test]
fn test_roi_3d_with_identity_transform_should_select_inside_rectangle() {
    let event = SelectionEvent::rectangle(vec2(10.0, 10.0), vec2(50.0, 40.0));
    let roi = roi_3d(&event, &CameraTransform::IDENTITY);

    assert_eq!(
        roi.roi_2d(),
        &Roi2d::Rectangle {
            min: vec2(10.0, 10.0),
            max: vec2(50.0, 40.0),
        }
    );
    assert_eq!(roi.project(vec3(20.0, 20.0, 0.0)), Some(vec2(20.0, 20.0)));
    assert!(roi.contains(vec3(20.0, 20.0, 0.0)));
    assert!(!roi.contains(vec3(60.0, 20.0, 0.0)));
}

#[test]
fn test_roi_3d_with_perspective_transform_should_contain_point_projected_to_circle_center() {
    let transform = given::perspective_transform();
    let combined = transform.combined().expect("combined");

    for p in [vec3(0.0, 0.0, 0.0), vec3(1.5, -2.0, 3.0), vec3(-4.0, 0.5, 20.0)] {
        let h = combined * p.extend(1.0);
        let center = h.xy() / h.w;

        for radius in [1e-4, 0.1, 10.0] {
            let roi = Roi3d::new(Roi2d::circle(center, radius).expect("circle"), &transform)
                .expect("roi 3d");

            assert!(roi.contains(p), "{p} with radius {radius}");
        }
    }
}

#[test]
fn test_roi_3d_should_exclude_points_outside_lasso_hull() {
    let event = SelectionEvent::lasso([vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(0.0, 10.0)]);
    let roi = roi_3d(&event, &CameraTransform::IDENTITY);

    assert!(roi.contains(vec3(2.0, 2.0, 7.0)));
    assert!(!roi.contains(vec3(20.0, 20.0, 0.0)));
    assert!(!roi.contains(vec3(6.0, 6.0, 0.0)));
    assert!(!roi.contains(vec3(-1.0, 5.0, 0.0)));
}

#[test]
fn test_roi_3d_should_use_even_odd_rule_for_self_intersecting_lasso() {
    // A bow tie crossing at (5, 5).
    let event = SelectionEvent::lasso([
        vec2(0.0, 0.0),
        vec2(10.0, 10.0),
        vec2(10.0, 0.0),
        vec2(0.0, 10.0),
    ]);
    let roi = roi_3d(&event, &CameraTransform::IDENTITY);

    assert!(roi.contains(vec3(8.0, 5.0, 0.0)));
    assert!(roi.contains(vec3(2.0, 5.0, 0.0)));
    assert!(!roi.contains(vec3(5.0, 8.0, 0.0)));
    assert!(!roi.contains(vec3(5.0, 2.0, 0.0)));
}

#[test]
fn test_roi_3d_should_exclude_points_at_camera_plane() {
    let transform = given::perspective_transform();
    let roi = Roi3d::new(Roi2d::circle(Vec2::ZERO, 1e6).expect("circle"), &transform)
        .expect("roi 3d");

    assert_eq!(roi.project(given::camera().pos), None);
    assert!(!roi.contains(given::camera().pos));
}

#[test]
fn test_roi_3d_should_keep_transform_snapshot_after_camera_moves() {
    let mut surface = TestSurface::identity();
    let event = SelectionEvent::rectangle(vec2(10.0, 10.0), vec2(50.0, 40.0));
    let roi = roi_3d(
        &event,
        &CameraTransform::snapshot(&surface).expect("snapshot"),
    );

    surface.transform = Some(CameraTransform::new(
        Mat4::from_translation(vec3(100.0, 0.0, 0.0)),
        Mat4::IDENTITY,
    ));
    let moved = roi_3d(
        &event,
        &CameraTransform::snapshot(&surface).expect("snapshot"),
    );

    assert_eq!(roi.transform(), &Mat4::IDENTITY);
    assert!(roi.contains(vec3(20.0, 20.0, 0.0)));
    assert!(!moved.contains(vec3(20.0, 20.0, 0.0)));
}

#[test]
fn test_roi_3d_built_twice_should_be_structurally_equal() {
    let transform = given::perspective_transform();
    let event = SelectionEvent::lasso([vec2(-0.5, -0.5), vec2(0.5, -0.5), vec2(0.0, 0.5)]);

    assert_eq!(roi_3d(&event, &transform), roi_3d(&event, &transform));
}

#[test]
fn test_roi_3d_contains_all_should_match_contains() {
    let event = SelectionEvent::circle(vec2(20.0, 20.0), vec2(30.0, 20.0));
    let roi = roi_3d(&event, &CameraTransform::IDENTITY);
    let points = given::points();

    assert_eq!(
        roi.contains_all(&points),
        points.iter().map(|p| roi.contains(*p)).collect::<Vec<_>>()
    );
    assert_eq!(roi.contains_all(&points), vec![true, false, false, false]);
}
