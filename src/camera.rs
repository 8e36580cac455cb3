use std::ops::Range;

use glam::*;

use crate::{Axis, GeometryError, SelectionMode};

/// The rendering surface a viewer draws to.
///
/// The matrices are flattened the way the renderer stores them, every four floats form one column.
pub trait RenderSurface {
    /// Get the world matrix, [`None`] if the surface has not been drawn yet.
    fn matrix_world(&self) -> Option<[f32; 16]>;

    /// Get the projection matrix, [`None`] if the surface has not been drawn yet.
    fn matrix_projection(&self) -> Option<[f32; 16]>;

    /// Set the data bounds shown along an axis.
    fn set_bounds(&mut self, axis: Axis, bounds: Range<f32>);

    /// Show or hide the axes and bounding box.
    fn set_axes_visible(&mut self, visible: bool);

    /// Set the selector tool used for the next gesture.
    fn set_selector(&mut self, mode: SelectionMode);
}

/// A snapshot of the camera transform of a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// The world matrix.
    pub world: Mat4,
    /// The projection matrix.
    pub projection: Mat4,
}

impl CameraTransform {
    /// The identity transform, data coordinates are device coordinates.
    pub const IDENTITY: Self = Self::new(Mat4::IDENTITY, Mat4::IDENTITY);

    /// Create a new camera transform.
    pub const fn new(world: Mat4, projection: Mat4) -> Self {
        Self { world, projection }
    }

    /// Create a camera transform from flattened matrices.
    pub fn from_slices(world: &[f32], projection: &[f32]) -> Result<Self, GeometryError> {
        Ok(Self::new(mat4_from_slice(world)?, mat4_from_slice(projection)?))
    }

    /// Take a snapshot of the current transform of the rendering surface.
    pub fn snapshot(surface: &impl RenderSurface) -> Result<Self, GeometryError> {
        let (Some(world), Some(projection)) = (surface.matrix_world(), surface.matrix_projection())
        else {
            return Err(GeometryError::TransformUnavailable);
        };

        Ok(Self::new(
            Mat4::from_cols_array(&world),
            Mat4::from_cols_array(&projection),
        ))
    }

    /// Get the combined matrix mapping data space to device space.
    ///
    /// Returns [`GeometryError::SingularTransform`] if the matrix cannot map points one-to-one.
    pub fn combined(&self) -> Result<Mat4, GeometryError> {
        let combined = self.projection * self.world;
        let det = combined.determinant();

        if !combined.is_finite() || !det.is_finite() || det == 0.0 {
            return Err(GeometryError::SingularTransform);
        }

        Ok(combined)
    }
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn mat4_from_slice(slice: &[f32]) -> Result<Mat4, GeometryError> {
    match slice.len() {
        16 => Ok(Mat4::from_cols_slice(slice)),
        len => Err(GeometryError::InvalidMatrixLength(len)),
    }
}

/// A perspective camera looking at the data.
#[derive(Debug, Clone)]
pub struct Camera {
    /// The position of the camera.
    pub pos: Vec3,
    /// The z range of the camera.
    pub z: Range<f32>,
    /// The vertical FOV.
    pub vertical_fov: f32,
    /// The pitch.
    pub pitch: f32,
    /// The yaw.
    pub yaw: f32,
}

impl Camera {
    /// Up direction.
    pub const UP: Vec3 = Vec3::Y;

    /// Create a new camera.
    pub fn new(z: Range<f32>, vertical_fov: f32) -> Self {
        Self {
            pos: Vec3::ZERO,
            z,
            vertical_fov,
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    /// Get the forward vector.
    pub fn get_forward(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }

    /// Get the view matrix, used as the world matrix of the transform.
    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.pos, self.get_forward(), Self::UP)
    }

    /// Get the projection matrix.
    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.vertical_fov, aspect_ratio, self.z.start, self.z.end)
    }

    /// Get the camera transform for a viewport.
    pub fn transform(&self, viewport_size: UVec2) -> CameraTransform {
        let size = viewport_size.as_vec2();
        CameraTransform::new(self.view(), self.projection(size.x / size.y))
    }
}
