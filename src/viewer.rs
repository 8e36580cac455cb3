use crate::{
    ApplySubsetState, Axis, AxisAttributes, CameraTransform, ComponentId, Dataset, Error, Gesture,
    RenderSurface, Roi3d, SelectionEvent, SelectionMode, Session, SubsetGroup, SubsetState,
};

/// The kind of 3D viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKind {
    /// Shows 3-D data as volumes and 1-D data as scatter points.
    Volume,

    /// Shows all data as scatter points.
    Scatter,
}

/// How a layer is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerArtistKind {
    Volume,
    Scatter,
}

/// A dataset or one of its subsets shown in a viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// The label of the dataset.
    pub data: String,
    /// The label of the subset group, [`None`] for the dataset itself.
    pub subset: Option<String>,
    /// The number of dimensions of the dataset.
    pub ndim: usize,
    /// The artist drawing the layer.
    pub artist: LayerArtistKind,
}

impl Layer {
    /// Get the display label, e.g. `Subset 1 (points)` for a subset layer.
    pub fn label(&self) -> String {
        match &self.subset {
            Some(subset) => format!("{subset} ({})", self.data),
            None => self.data.clone(),
        }
    }

    fn is_data(&self, data: &str) -> bool {
        self.subset.is_none() && self.data == data
    }

    fn is_subset(&self, data: &str, subset: &str) -> bool {
        self.data == data && self.subset.as_deref() == Some(subset)
    }
}

/// The axis limits of the viewer state.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub x_min: Option<f32>,
    pub x_max: Option<f32>,
    pub y_min: Option<f32>,
    pub y_max: Option<f32>,
    pub z_min: Option<f32>,
    pub z_max: Option<f32>,
}

/// One of the six limit values of [`AxisLimits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    XMin,
    XMax,
    YMin,
    YMax,
    ZMin,
    ZMax,
}

impl AxisLimits {
    fn get_mut(&mut self, limit: Limit) -> &mut Option<f32> {
        match limit {
            Limit::XMin => &mut self.x_min,
            Limit::XMax => &mut self.x_max,
            Limit::YMin => &mut self.y_min,
            Limit::YMax => &mut self.y_max,
            Limit::ZMin => &mut self.z_min,
            Limit::ZMax => &mut self.z_max,
        }
    }

    /// Get the renderer bounds for an axis, if both ends are set.
    ///
    /// The z bounds follow the y limits, `z_min` and `z_max` are not forwarded.
    pub fn bounds(&self, axis: Axis) -> Option<std::ops::Range<f32>> {
        let (min, max) = match axis {
            Axis::X => (self.x_min, self.x_max),
            Axis::Y | Axis::Z => (self.y_min, self.y_max),
        };

        Some(min?..max?)
    }
}

/// The state of a 3D viewer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ViewerState {
    /// The components shown along the axes.
    pub attributes: Option<AxisAttributes>,
    /// The axis limits.
    pub limits: AxisLimits,
    /// The selector tool.
    pub mode: SelectionMode,
    /// Whether the axes are shown.
    pub visible_axes: bool,
}

/// The result of handling a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// A subset state was applied through the command stack.
    Applied(SubsetState),

    /// The viewer has no layers, nothing was applied.
    NoLayers,

    /// The selection had no device coordinates, nothing was applied.
    EmptyGesture,
}

/// A 3D viewer turning selections on its rendering surface into subsets.
#[derive(Debug)]
pub struct Viewer<S: RenderSurface> {
    kind: ViewerKind,
    state: ViewerState,
    layers: Vec<Layer>,
    surface: S,
}

impl<S: RenderSurface> Viewer<S> {
    /// Create a new viewer.
    pub fn new(kind: ViewerKind, surface: S) -> Self {
        log::debug!("Creating {kind:?} viewer");

        Self {
            kind,
            state: ViewerState::default(),
            layers: Vec::new(),
            surface,
        }
    }

    /// Get the kind.
    pub fn kind(&self) -> ViewerKind {
        self.kind
    }

    /// Get the state.
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Get the layers.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Get the rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Get the rendering surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Add a dataset as a layer.
    pub fn add_data(&mut self, dataset: &Dataset) -> Result<(), Error> {
        if self.layers.iter().any(|l| l.is_data(dataset.label())) {
            return Err(Error::DuplicateLayer(dataset.label().to_string()));
        }

        self.push_layer(dataset, None);

        match self.kind {
            ViewerKind::Volume => self.update_volume_attributes(),
            ViewerKind::Scatter if self.state.attributes.is_none() => {
                let mut ids = dataset.component_ids().cloned();
                if let (Some(x), Some(y), Some(z)) = (ids.next(), ids.next(), ids.next()) {
                    self.state.attributes = Some(AxisAttributes { x, y, z });
                }
            }
            ViewerKind::Scatter => {}
        }

        Ok(())
    }

    /// Add a subset group of a dataset as a layer.
    ///
    /// The dataset is added first if it is not shown yet.
    pub fn add_subset(&mut self, dataset: &Dataset, group: &SubsetGroup) -> Result<(), Error> {
        if self
            .layers
            .iter()
            .any(|l| l.is_subset(dataset.label(), &group.label))
        {
            return Err(Error::DuplicateLayer(format!(
                "{} ({})",
                group.label,
                dataset.label()
            )));
        }

        if !self.layers.iter().any(|l| l.is_data(dataset.label())) {
            self.add_data(dataset)?;
        }

        self.push_layer(dataset, Some(group.label.clone()));
        Ok(())
    }

    fn push_layer(&mut self, dataset: &Dataset, subset: Option<String>) {
        let artist = match (self.kind, dataset.ndim()) {
            (ViewerKind::Volume, 1) | (ViewerKind::Scatter, _) => LayerArtistKind::Scatter,
            (ViewerKind::Volume, _) => LayerArtistKind::Volume,
        };

        let layer = Layer {
            data: dataset.label().to_string(),
            subset,
            ndim: dataset.ndim(),
            artist,
        };

        log::debug!("Adding layer \"{}\" as {artist:?}", layer.label());
        self.layers.push(layer);
    }

    /// Remove the subset layer of a dataset, returns `false` if it is not shown.
    pub fn remove_subset(&mut self, data: &str, subset: &str) -> bool {
        let len = self.layers.len();
        self.layers.retain(|l| !l.is_subset(data, subset));
        self.layers.len() != len
    }

    /// Remove the layer of a dataset and its subset layers, returns `false` if it is not shown.
    pub fn remove_data(&mut self, label: &str) -> bool {
        let len = self.layers.len();
        self.layers.retain(|l| l.data != label);
        if self.layers.len() == len {
            return false;
        }

        if self.kind == ViewerKind::Volume {
            self.update_volume_attributes();
        }

        true
    }

    /// Use the pixel components of the first 3-D layer as axes.
    fn update_volume_attributes(&mut self) {
        match self.layers.iter().find(|l| l.subset.is_none() && l.ndim == 3) {
            Some(layer) => {
                let [z, y, x] = [0, 1, 2].map(|dim| ComponentId::pixel(dim, 3));
                log::debug!("Using pixel components of \"{}\" as axes", layer.data);
                self.state.attributes = Some(AxisAttributes { x, y, z });
            }
            None => self.state.attributes = None,
        }
    }

    /// Set the axis attributes.
    pub fn set_attributes(&mut self, attributes: Option<AxisAttributes>) {
        self.state.attributes = attributes;
    }

    /// Set the selector tool.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.state.mode = mode;
        self.surface.set_selector(mode);
    }

    /// Show or hide the axes.
    pub fn set_visible_axes(&mut self, visible: bool) {
        self.state.visible_axes = visible;
        self.surface.set_axes_visible(visible);
    }

    /// Set one axis limit, syncing the renderer bounds if it changed.
    ///
    /// Returns whether the value changed.
    pub fn set_limit(&mut self, limit: Limit, value: Option<f32>) -> bool {
        let slot = self.state.limits.get_mut(limit);
        if *slot == value {
            return false;
        }

        *slot = value;
        self.limits_to_bounds();
        true
    }

    /// Push the state limits to the renderer bounds.
    pub fn limits_to_bounds(&mut self) {
        for axis in Axis::ALL {
            if let Some(bounds) = self.state.limits.bounds(axis) {
                self.surface.set_bounds(axis, bounds);
            }
        }
    }

    /// Handle a selection from the rendering surface.
    ///
    /// The camera transform is read from the surface when this is called.
    pub fn on_selection(
        &mut self,
        session: &mut Session,
        event: &SelectionEvent,
    ) -> Result<SelectionOutcome, Error> {
        if event.device.is_empty() {
            return Ok(SelectionOutcome::EmptyGesture);
        }

        let roi = Self::build_roi(event, &self.surface).inspect_err(|e| {
            log::warn!("Rejected {} selection: {e}", event.kind);
        })?;

        self.apply_roi(session, roi)
    }

    fn build_roi(event: &SelectionEvent, surface: &S) -> Result<Roi3d, Error> {
        let gesture = Gesture::from_event(event)?;
        let camera = CameraTransform::snapshot(surface)?;
        let roi_2d = gesture.to_roi_2d()?;

        log::debug!("Built {} region {roi_2d:?}", gesture.mode());
        Ok(Roi3d::new(roi_2d, &camera)?)
    }

    /// Apply a region to the data through the command stack of the session.
    pub fn apply_roi(
        &self,
        session: &mut Session,
        roi: Roi3d,
    ) -> Result<SelectionOutcome, Error> {
        if self.layers.is_empty() {
            return Ok(SelectionOutcome::NoLayers);
        }

        let attributes = self
            .state
            .attributes
            .clone()
            .ok_or(Error::MissingAttributes)?;

        let subset_state = SubsetState::roi_3d(attributes, roi);
        session.execute(ApplySubsetState::new(subset_state.clone()));

        log::info!("Applied selection subset");
        Ok(SelectionOutcome::Applied(subset_state))
    }
}
