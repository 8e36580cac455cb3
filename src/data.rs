use std::fmt;

use glam::*;

use crate::{Error, SubsetState};

/// The identifier of a dataset component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId(String);

impl ComponentId {
    /// Create a new component ID.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.0
    }

    /// Get the ID of the pixel coordinate component along a dimension.
    pub fn pixel(dim: usize, ndim: usize) -> Self {
        const AXES: [&str; 3] = ["x", "y", "z"];

        match ndim.checked_sub(dim + 1).and_then(|i| AXES.get(i)) {
            Some(axis) => Self(format!("Pixel Axis {dim} [{axis}]")),
            None => Self(format!("Pixel Axis {dim}")),
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// A named column of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    pub values: Vec<f32>,
}

/// A dataset of flattened components sharing one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    label: String,
    shape: Vec<usize>,
    components: Vec<Component>,
}

impl Dataset {
    /// Create a new dataset without components.
    pub fn new(label: impl Into<String>, shape: impl Into<Vec<usize>>) -> Self {
        Self {
            label: label.into(),
            shape: shape.into(),
            components: Vec::new(),
        }
    }

    /// Create a 1-D dataset with `x`, `y` and `z` components from points.
    pub fn from_points(label: impl Into<String>, points: &[Vec3]) -> Self {
        let mut dataset = Self::new(label, [points.len()]);
        for (i, axis) in ["x", "y", "z"].into_iter().enumerate() {
            dataset.components.push(Component {
                id: ComponentId::new(axis),
                values: points.iter().map(|p| p[i]).collect(),
            });
        }
        dataset
    }

    /// Create a 1-D dataset from an interleaved `[x, y, z, x, y, z, ...]` buffer.
    pub fn from_interleaved_xyz(label: impl Into<String>, xyz: &[f32]) -> Result<Self, Error> {
        let points: &[Vec3] =
            bytemuck::try_cast_slice(xyz).map_err(|_| Error::InterleavedLength(xyz.len()))?;
        Ok(Self::from_points(label, points))
    }

    /// Create a 3-D volume from values ordered `z`, `y`, `x` with `x` varying fastest.
    ///
    /// The pixel coordinate components are added before the `values` component.
    pub fn volume(
        label: impl Into<String>,
        shape: [usize; 3],
        values: Vec<f32>,
    ) -> Result<Self, Error> {
        let [_, ny, nx] = shape;
        let mut dataset = Self::new(label, shape);
        let size = dataset.size();

        let pixel = |dim: usize, i: usize| match dim {
            0 => i / (ny * nx),
            1 => (i / nx) % ny,
            _ => i % nx,
        };

        for dim in 0..3 {
            dataset.components.push(Component {
                id: ComponentId::pixel(dim, 3),
                values: (0..size).map(|i| pixel(dim, i) as f32).collect(),
            });
        }

        dataset.with_component("values", values)
    }

    /// Add a component.
    pub fn with_component(
        mut self,
        id: impl Into<ComponentId>,
        values: Vec<f32>,
    ) -> Result<Self, Error> {
        if values.len() != self.size() {
            return Err(Error::ComponentLength {
                expected: self.size(),
                found: values.len(),
            });
        }

        self.components.push(Component {
            id: id.into(),
            values,
        });
        Ok(self)
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Get the number of elements.
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    /// Get the components.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Get the component IDs.
    pub fn component_ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.components.iter().map(|c| &c.id)
    }

    /// Get the values of a component.
    pub fn component(&self, id: &ComponentId) -> Result<&[f32], Error> {
        self.components
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| Error::ComponentNotFound(id.clone()))
    }

    /// Get the pixel coordinate component IDs, ordered by dimension.
    pub fn pixel_component_ids(&self) -> Vec<ComponentId> {
        (0..self.ndim())
            .map(|dim| ComponentId::pixel(dim, self.ndim()))
            .collect()
    }
}

/// A subset shared by all datasets of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetGroup {
    pub label: String,
    pub subset_state: SubsetState,
}

impl SubsetGroup {
    /// Evaluate the subset against a dataset.
    pub fn mask(&self, dataset: &Dataset) -> Result<Vec<bool>, Error> {
        self.subset_state.mask(dataset)
    }
}

/// The datasets and subsets of a session.
#[derive(Debug, Default)]
pub struct DataCollection {
    datasets: Vec<Dataset>,
    subset_groups: Vec<SubsetGroup>,
    edit_subset: Option<usize>,
}

impl DataCollection {
    /// Create an empty data collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset.
    pub fn append(&mut self, dataset: Dataset) {
        log::debug!("Adding dataset \"{}\"", dataset.label());
        self.datasets.push(dataset);
    }

    /// Get the datasets.
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Get a dataset by label.
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label() == label)
    }

    /// Get the subset groups.
    pub fn subset_groups(&self) -> &[SubsetGroup] {
        &self.subset_groups
    }

    /// Get the index of the subset group being edited.
    pub fn edit_subset(&self) -> Option<usize> {
        self.edit_subset
    }

    /// Set the subset group being edited, [`None`] to create a new group on the next selection.
    pub fn set_edit_subset(&mut self, index: Option<usize>) {
        self.edit_subset = index.filter(|i| *i < self.subset_groups.len());
    }

    /// Add a new subset group and make it the edit subset.
    pub(crate) fn push_subset_group(&mut self, subset_state: SubsetState) -> usize {
        let index = self.subset_groups.len();
        self.subset_groups.push(SubsetGroup {
            label: format!("Subset {}", index + 1),
            subset_state,
        });
        self.edit_subset = Some(index);
        index
    }

    /// Remove the last subset group.
    pub(crate) fn pop_subset_group(&mut self) -> Option<SubsetGroup> {
        let group = self.subset_groups.pop()?;
        if self.edit_subset == Some(self.subset_groups.len()) {
            self.edit_subset = None;
        }
        Some(group)
    }

    /// Replace the state of a subset group, returning the old state.
    pub(crate) fn replace_subset_state(
        &mut self,
        index: usize,
        subset_state: SubsetState,
    ) -> Option<SubsetState> {
        let group = self.subset_groups.get_mut(index)?;
        Some(std::mem::replace(&mut group.subset_state, subset_state))
    }
}
