use std::ops::Index;

use glam::*;

use crate::{ComponentId, Dataset, Error, Roi3d};

/// The three axes of a 3D viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Get the axis name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// The components shown along each axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AxisAttributes {
    pub x: ComponentId,
    pub y: ComponentId,
    pub z: ComponentId,
}

impl AxisAttributes {
    /// Create new axis attributes.
    pub fn new(
        x: impl Into<ComponentId>,
        y: impl Into<ComponentId>,
        z: impl Into<ComponentId>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// Iterate the attributes with their axes.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &ComponentId)> {
        Axis::ALL.into_iter().map(move |axis| (axis, &self[axis]))
    }
}

impl Index<Axis> for AxisAttributes {
    type Output = ComponentId;

    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

/// A predicate over dataset components defining a subset.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum SubsetState {
    /// Nothing is selected.
    #[default]
    None,

    /// Points whose axis attributes fall inside a projected region.
    Roi3d {
        attributes: AxisAttributes,
        roi: Roi3d,
    },
}

impl SubsetState {
    /// Create a subset state from a projected region.
    pub fn roi_3d(attributes: AxisAttributes, roi: Roi3d) -> Self {
        Self::Roi3d { attributes, roi }
    }

    /// Evaluate the subset against a dataset.
    pub fn mask(&self, dataset: &Dataset) -> Result<Vec<bool>, Error> {
        match self {
            Self::None => Ok(vec![false; dataset.size()]),
            Self::Roi3d { attributes, roi } => {
                let x = dataset.component(&attributes.x)?;
                let y = dataset.component(&attributes.y)?;
                let z = dataset.component(&attributes.z)?;

                Ok(x.iter()
                    .zip(y)
                    .zip(z)
                    .map(|((x, y), z)| roi.contains(vec3(*x, *y, *z)))
                    .collect())
            }
        }
    }

    /// Count the elements of the dataset in the subset.
    pub fn count(&self, dataset: &Dataset) -> Result<usize, Error> {
        Ok(self.mask(dataset)?.into_iter().filter(|m| *m).count())
    }
}
