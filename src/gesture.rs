use std::{fmt, str::FromStr};

use glam::*;

use crate::{Error, GeometryError, Roi2d};

/// The device coordinates carried by a [`SelectionEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum DevicePayload {
    /// No device coordinates, e.g. the selection was cancelled.
    Empty,

    /// The ordered vertices of a lasso.
    Points(Vec<Vec2>),

    /// The begin and end position of a drag.
    Span { begin: Vec2, end: Vec2 },
}

impl DevicePayload {
    /// Check if the payload carries no coordinates.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Points(points) => points.is_empty(),
            Self::Span { .. } => false,
        }
    }
}

/// A raw selection event as delivered by the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    /// The selector type, e.g. `"lasso"`.
    pub kind: String,

    /// The device (screen pixel) coordinates.
    pub device: DevicePayload,
}

impl SelectionEvent {
    /// Create a new selection event.
    pub fn new(kind: impl Into<String>, device: DevicePayload) -> Self {
        Self {
            kind: kind.into(),
            device,
        }
    }

    /// Create a lasso event.
    pub fn lasso(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self::new(
            SelectionMode::Lasso.as_str(),
            DevicePayload::Points(points.into_iter().collect()),
        )
    }

    /// Create a circle event.
    pub fn circle(begin: Vec2, end: Vec2) -> Self {
        Self::new(
            SelectionMode::Circle.as_str(),
            DevicePayload::Span { begin, end },
        )
    }

    /// Create a rectangle event.
    pub fn rectangle(begin: Vec2, end: Vec2) -> Self {
        Self::new(
            SelectionMode::Rectangle.as_str(),
            DevicePayload::Span { begin, end },
        )
    }
}

/// A completed selection gesture in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// A closed polygon through the points.
    Lasso { points: Vec<Vec2> },

    /// A circle.
    Circle { center: Vec2, radius: f32 },

    /// An axis-aligned rectangle.
    ///
    /// `min` is componentwise less than or equal to `max`.
    Rectangle { min: Vec2, max: Vec2 },
}

impl Gesture {
    /// Create a gesture from a raw selection event.
    ///
    /// - Circle uses the begin position as center and the distance to the end as radius.
    /// - Rectangle takes the componentwise min and max of begin and end.
    pub fn from_event(event: &SelectionEvent) -> Result<Self, Error> {
        let mode = event
            .kind
            .parse::<SelectionMode>()
            .map_err(|_| Error::UnsupportedGesture(event.kind.clone()))?;

        match (mode, &event.device) {
            (SelectionMode::Lasso, DevicePayload::Points(points)) => Ok(Self::Lasso {
                points: points.clone(),
            }),
            (SelectionMode::Circle, DevicePayload::Span { begin, end }) => Ok(Self::Circle {
                center: *begin,
                radius: begin.distance(*end),
            }),
            (SelectionMode::Rectangle, DevicePayload::Span { begin, end }) => {
                Ok(Self::Rectangle {
                    min: begin.min(*end),
                    max: begin.max(*end),
                })
            }
            _ => Err(GeometryError::MalformedPayload.into()),
        }
    }

    /// Get the selection mode producing this gesture.
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Lasso { .. } => SelectionMode::Lasso,
            Self::Circle { .. } => SelectionMode::Circle,
            Self::Rectangle { .. } => SelectionMode::Rectangle,
        }
    }

    /// Build the 2D region of interest.
    pub fn to_roi_2d(&self) -> Result<Roi2d, GeometryError> {
        match self {
            Self::Lasso { points } => Roi2d::polygon(points.clone()),
            Self::Circle { center, radius } => Roi2d::circle(*center, *radius),
            Self::Rectangle { min, max } => Roi2d::rectangle(*min, *max),
        }
    }
}

/// The selector tool of the rendering surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    #[default]
    Lasso,
    Circle,
    Rectangle,
}

impl SelectionMode {
    /// All modes in the order they are offered to the user.
    pub const ALL: [Self; 3] = [Self::Lasso, Self::Circle, Self::Rectangle];

    /// Get the renderer's name of the tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lasso => "lasso",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::UnknownSelectionMode(s.to_string()))
    }
}
