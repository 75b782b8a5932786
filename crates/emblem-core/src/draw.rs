//! Drawable elements and the canvas that composes them.
//!
//! A logo is a [`Canvas`] holding an ordered list of [`Drawable`]s. Each
//! drawable knows how to compute its own coordinates from a container
//! [`Frame`] and how to turn itself into a single SVG fragment.
//!
//! # Overview
//!
//! - [`Shape`] - A circle, square or triangle with a fill color
//! - [`Text`] - A short centered caption
//! - [`Drawable`] - The closed set of things a canvas can hold
//! - [`Canvas`] - The root container that renders the full document
//!
//! # Attachment
//!
//! [`Canvas::add_child`] records the canvas id on the drawable and
//! [`Canvas::remove_child`] clears it again. The record is read-only: a
//! drawable never reaches back into its canvas, the canvas hands its current
//! frame down whenever a child needs one.

mod canvas;
mod shape;
mod text;

pub use canvas::{Canvas, DEFAULT_BACKGROUND, DEFAULT_CANVAS_SIZE};
pub use shape::{DEFAULT_SHAPE_SIZE, Shape, ShapeKind, ShapePosition};
pub use text::{
    BASE_FONT_SIZE, DEFAULT_FONT_SCALE, MAX_CAPTION_LEN, Text, TextAnchor, TextBaseline,
    TextPosition,
};

use crate::{
    geometry::Frame,
    identifier::{CanvasId, DrawableId},
};

/// Policy a drawable uses to place itself inside its container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    /// Centered horizontally and vertically within the container.
    #[default]
    Centered,
}

/// Anything a [`Canvas`] can hold.
///
/// The set is closed: adding a new kind of element means adding a variant
/// here, and every dispatch below stays exhaustive.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Shape(Shape),
    Text(Text),
}

impl Drawable {
    /// Returns the identity assigned to this drawable at construction.
    pub fn id(&self) -> DrawableId {
        match self {
            Self::Shape(shape) => shape.id(),
            Self::Text(text) => text.id(),
        }
    }

    /// Returns the canvas this drawable is attached to, if any.
    pub fn parent(&self) -> Option<CanvasId> {
        match self {
            Self::Shape(shape) => shape.parent(),
            Self::Text(text) => text.parent(),
        }
    }

    /// Returns the shape inside this drawable, if it is one.
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Self::Shape(shape) => Some(shape),
            Self::Text(_) => None,
        }
    }

    /// Returns the caption inside this drawable, if it is one.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Shape(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Renders this drawable's fragment using its own fallback frame.
    pub fn render(&self) -> String {
        self.render_in(None)
    }

    /// Renders this drawable's fragment inside the given container frame.
    ///
    /// When `frame` is `None` the drawable falls back to its unattached
    /// default position.
    pub fn render_in(&self, frame: Option<Frame>) -> String {
        match self {
            Self::Shape(shape) => shape.render_in(frame),
            Self::Text(text) => text.render_in(frame),
        }
    }

    fn set_parent(&mut self, parent: Option<CanvasId>) {
        match self {
            Self::Shape(shape) => shape.set_parent(parent),
            Self::Text(text) => text.set_parent(parent),
        }
    }
}

impl From<Shape> for Drawable {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

impl From<Text> for Drawable {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}
