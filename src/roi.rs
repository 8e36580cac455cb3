use glam::*;

use crate::{CameraTransform, GeometryError};

/// A region of interest in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Roi2d {
    /// A closed polygon, tested with the even-odd rule.
    Polygon { vertices: Vec<Vec2> },

    /// A circle.
    Circle { center: Vec2, radius: f32 },

    /// An axis-aligned rectangle, bounds exclusive.
    Rectangle { min: Vec2, max: Vec2 },
}

impl Roi2d {
    /// Create a polygon, requires at least 3 vertices enclosing a nonzero area.
    pub fn polygon(vertices: Vec<Vec2>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 || polygon_area(&vertices) == 0.0 {
            return Err(GeometryError::EmptyPolygon(vertices.len()));
        }

        Ok(Self::Polygon { vertices })
    }

    /// Create a circle, requires a positive finite radius.
    pub fn circle(center: Vec2, radius: f32) -> Result<Self, GeometryError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::ZeroRadius);
        }

        Ok(Self::Circle { center, radius })
    }

    /// Create a rectangle from two opposite corners in any order.
    ///
    /// Requires a nonzero width and height.
    pub fn rectangle(a: Vec2, b: Vec2) -> Result<Self, GeometryError> {
        let (min, max) = (a.min(b), a.max(b));
        if !(min.cmplt(max).all() && min.is_finite() && max.is_finite()) {
            return Err(GeometryError::EmptyRectangle);
        }

        Ok(Self::Rectangle { min, max })
    }

    /// Check if the point is inside.
    pub fn contains(&self, p: Vec2) -> bool {
        if !p.is_finite() {
            return false;
        }

        match self {
            Self::Polygon { vertices } => polygon_contains(vertices, p),
            Self::Circle { center, radius } => center.distance_squared(p) < radius * radius,
            Self::Rectangle { min, max } => p.cmpgt(*min).all() && p.cmplt(*max).all(),
        }
    }
}

/// Shoelace area, not signed.
fn polygon_area(vertices: &[Vec2]) -> f32 {
    let mut j = vertices.len() - 1;
    let mut twice_area = 0.0;

    for (i, a) in vertices.iter().enumerate() {
        twice_area += vertices[j].perp_dot(*a);
        j = i;
    }

    (twice_area * 0.5).abs()
}

/// Even-odd crossing test.
fn polygon_contains(vertices: &[Vec2], p: Vec2) -> bool {
    if vertices.is_empty() {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;

    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[j];
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// A [`Roi2d`] lifted to data space through a camera transform.
///
/// A point is inside if its projection to device space is inside the 2D region. The transform is
/// the one captured when the gesture happened, later camera movement does not affect it.
#[derive(Debug, Clone, PartialEq)]
pub struct Roi3d {
    roi_2d: Roi2d,
    transform: Mat4,
}

impl Roi3d {
    /// Create a new projected region.
    pub fn new(roi_2d: Roi2d, camera: &CameraTransform) -> Result<Self, GeometryError> {
        Ok(Self {
            roi_2d,
            transform: camera.combined()?,
        })
    }

    /// Get the 2D region.
    pub fn roi_2d(&self) -> &Roi2d {
        &self.roi_2d
    }

    /// Get the combined data-to-device matrix.
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Project a data space point to device space.
    ///
    /// Returns [`None`] if the homogeneous coordinate is zero or the result is not finite.
    pub fn project(&self, p: Vec3) -> Option<Vec2> {
        let h = self.transform * p.extend(1.0);
        if h.w == 0.0 {
            return None;
        }

        let device = h.xy() / h.w;
        device.is_finite().then_some(device)
    }

    /// Check if the point is inside.
    pub fn contains(&self, p: Vec3) -> bool {
        self.project(p).is_some_and(|d| self.roi_2d.contains(d))
    }

    /// Check each point, returning the mask.
    pub fn contains_all<'a>(&self, points: impl IntoIterator<Item = &'a Vec3>) -> Vec<bool> {
        points.into_iter().map(|p| self.contains(*p)).collect()
    }
}
