use viewer_selection::{CameraTransform, GeometryError, glam::*};

use crate::common::{TestSurface, given};

#[test]
fn test_camera_transform_combined_should_be_projection_times_world() {
    let world = Mat4::from_translation(vec3(1.0, 2.0, 3.0));
    let projection = Mat4::from_scale(vec3(2.0, 3.0, 4.0));
    let transform = CameraTransform::new(world, projection);

    assert_eq!(transform.combined(), Ok(projection * world));
}

#[test]
fn test_camera_transform_from_slices_should_read_columns() {
    let world = Mat4::from_translation(vec3(5.0, -1.0, 2.0));
    let transform =
        CameraTransform::from_slices(&world.to_cols_array(), &Mat4::IDENTITY.to_cols_array())
            .expect("transform");

    assert_eq!(transform.world, world);
    assert_eq!(transform.world.w_axis, vec4(5.0, -1.0, 2.0, 1.0));
}

#[test]
fn test_camera_transform_from_slices_with_wrong_length_should_fail() {
    assert_eq!(
        CameraTransform::from_slices(&[0.0; 9], &[0.0; 16]),
        Err(GeometryError::InvalidMatrixLength(9))
    );
}

#[test]
fn test_camera_transform_combined_when_singular_should_fail() {
    let flatten = Mat4::from_scale(vec3(1.0, 1.0, 0.0));
    let transform = CameraTransform::new(flatten, Mat4::IDENTITY);

    assert_eq!(transform.combined(), Err(GeometryError::SingularTransform));
}

#[test]
fn test_camera_transform_combined_with_tiny_determinant_should_succeed() {
    let shrink = Mat4::from_scale(Vec3::splat(1e-3));
    let transform = CameraTransform::new(shrink, Mat4::IDENTITY);

    let combined = transform.combined().expect("combined");

    assert!(combined.determinant() > 0.0);
    assert!(combined.determinant() < f32::EPSILON);
}

#[test]
fn test_camera_transform_combined_when_non_finite_should_fail() {
    let mut world = Mat4::IDENTITY;
    world.x_axis.x = f32::NAN;
    let transform = CameraTransform::new(world, Mat4::IDENTITY);

    assert_eq!(transform.combined(), Err(GeometryError::SingularTransform));
}

#[test]
fn test_camera_transform_snapshot_should_read_surface() {
    let transform = given::perspective_transform();
    let surface = TestSurface::new(transform);

    assert_eq!(CameraTransform::snapshot(&surface), Ok(transform));
}

#[test]
fn test_camera_transform_snapshot_when_unavailable_should_fail() {
    assert_eq!(
        CameraTransform::snapshot(&TestSurface::unavailable()),
        Err(GeometryError::TransformUnavailable)
    );
}

#[test]
fn test_camera_transform_should_use_view_and_projection() {
    let camera = given::camera();
    let transform = camera.transform(uvec2(800, 600));

    assert_eq!(transform.world, camera.view());
    assert_eq!(transform.projection, camera.projection(800.0 / 600.0));
}
