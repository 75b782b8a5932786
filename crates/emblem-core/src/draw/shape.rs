//! Shape definitions and rendering.
//!
//! This module provides [`ShapeKind`], the closed set of supported primitives,
//! and [`Shape`], a filled instance of one of them. Coordinates are never
//! stored: [`ShapeKind::position`] derives them from a size and a container
//! [`Frame`] each time they are needed, and [`ShapePosition::fragment`] turns
//! them into SVG.

use std::{fmt, str::FromStr};

use log::trace;

use crate::{
    Error,
    draw::Placement,
    geometry::{Frame, Point, degrees_to_radians, round_half, round_output},
    identifier::{CanvasId, DrawableId},
    markup::escape_attr,
};

/// Edge length or diameter used when none is given.
pub const DEFAULT_SHAPE_SIZE: f32 = 100.0;

/// The primitives a logo can be built from.
///
/// Parsing is case-insensitive:
///
/// ```
/// # use emblem_core::draw::ShapeKind;
/// assert_eq!("Triangle".parse::<ShapeKind>(), Ok(ShapeKind::Triangle));
/// assert!("hexagon".parse::<ShapeKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// All supported kinds, in the order they are offered to users.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Square];

    /// Returns the lowercase name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
        }
    }

    /// Computes where a shape of this kind and `size` sits inside `frame`.
    ///
    /// Without a frame the shape is laid out against the origin: circles are
    /// inscribed in the `size`×`size` square at `(0, 0)`, squares start at
    /// `(0, 0)` and triangles put their apex on the top edge.
    pub fn position(self, size: f32, frame: Option<Frame>) -> ShapePosition {
        match self {
            Self::Circle => {
                let center = match frame {
                    Some(frame) => frame.center(),
                    None => Point::new(size / 2.0, size / 2.0),
                };
                ShapePosition::Circle {
                    center,
                    radius: size / 2.0,
                }
            }
            Self::Square => {
                let top_left = match frame {
                    Some(frame) => frame.position().add_point(Point::new(
                        (frame.size().width() - size) / 2.0,
                        (frame.size().height() - size) / 2.0,
                    )),
                    None => Point::default(),
                };
                ShapePosition::Square {
                    top_left,
                    side: size,
                }
            }
            Self::Triangle => {
                let side = triangle_side(size);
                let apex = match frame {
                    Some(frame) => Point::new(
                        frame.center().x(),
                        frame.position().y() + (frame.size().height() - size) / 2.0,
                    ),
                    None => Point::new(side / 2.0, 0.0),
                };
                let half = side / 2.0;
                ShapePosition::Triangle {
                    points: [
                        apex,
                        Point::new(apex.x() - half, apex.y() + size),
                        Point::new(apex.x() + half, apex.y() + size),
                    ],
                    side,
                }
            }
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            "triangle" => Ok(Self::Triangle),
            _ => Err(Error::UnsupportedShapeKind(s.to_string())),
        }
    }
}

/// Side length of an equilateral triangle of the given height, rounded to 0.5.
fn triangle_side(height: f32) -> f32 {
    round_half(height / degrees_to_radians(60.0).sin())
}

/// Coordinates of a shape, specific to its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapePosition {
    Circle { center: Point, radius: f32 },
    Square { top_left: Point, side: f32 },
    Triangle { points: [Point; 3], side: f32 },
}

impl ShapePosition {
    /// Renders these coordinates as an SVG element filled with `color`.
    pub fn fragment(&self, color: &str) -> String {
        let color = escape_attr(color);
        match self {
            Self::Circle { center, radius } => format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{color}" />"#,
                round_output(center.x()),
                round_output(center.y()),
                round_output(*radius),
            ),
            Self::Square { top_left, side } => {
                let side = round_output(*side);
                format!(
                    r#"<rect x="{}" y="{}" width="{side}" height="{side}" fill="{color}" />"#,
                    round_output(top_left.x()),
                    round_output(top_left.y()),
                )
            }
            Self::Triangle { points, .. } => {
                let points = points
                    .iter()
                    .map(|p| format!("{},{}", round_output(p.x()), round_output(p.y())))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(r#"<polygon points="{points}" fill="{color}" />"#)
            }
        }
    }
}

/// A filled primitive that can be placed on a canvas.
///
/// # Examples
///
/// ```
/// # use emblem_core::draw::{Shape, ShapeKind};
/// # use emblem_core::geometry::{Frame, Size};
/// let square = Shape::new(ShapeKind::Square, "navy")
///     .with_size(150.0)
///     .with_frame(Frame::new(Size::new(300.0, 200.0)));
///
/// assert_eq!(
///     square.render(),
///     r#"<rect x="75" y="25" width="150" height="150" fill="navy" />"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: DrawableId,
    parent: Option<CanvasId>,
    kind: ShapeKind,
    color: String,
    size: f32,
    placement: Placement,
    frame: Option<Frame>,
}

impl Shape {
    /// Creates a shape of the given kind with [`DEFAULT_SHAPE_SIZE`].
    ///
    /// The color string is used verbatim.
    pub fn new(kind: ShapeKind, color: impl Into<String>) -> Self {
        Self {
            id: DrawableId::new(),
            parent: None,
            kind,
            color: color.into(),
            size: DEFAULT_SHAPE_SIZE,
            placement: Placement::default(),
            frame: None,
        }
    }

    /// Creates a shape from a kind name such as `"circle"` or `"Square"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedShapeKind`] if the name is not a known kind.
    pub fn from_kind_name(name: &str, color: impl Into<String>) -> Result<Self, Error> {
        let kind = name.parse::<ShapeKind>()?;
        Ok(Self::new(kind, color))
    }

    /// Sets the edge length (or diameter) of the shape.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Sets the frame used while the shape is not attached to a canvas.
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    pub fn parent(&self) -> Option<CanvasId> {
        self.parent
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Coordinates of the shape when it is not inside a canvas.
    pub fn position(&self) -> ShapePosition {
        self.position_in(None)
    }

    /// Coordinates of the shape inside a container frame.
    ///
    /// `None` falls back to the standalone frame given with
    /// [`with_frame`](Self::with_frame), and then to the origin.
    pub fn position_in(&self, frame: Option<Frame>) -> ShapePosition {
        let frame = frame.or(self.frame);
        match self.placement {
            Placement::Centered => self.kind.position(self.size, frame),
        }
    }

    /// Renders the shape when it is not inside a canvas.
    pub fn render(&self) -> String {
        self.render_in(None)
    }

    /// Renders the shape inside a container frame.
    pub fn render_in(&self, frame: Option<Frame>) -> String {
        let position = self.position_in(frame);
        trace!(kind:% = self.kind, position:?; "Rendering shape");
        position.fragment(&self.color)
    }

    pub(super) fn set_parent(&mut self, parent: Option<CanvasId>) {
        self.parent = parent;
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::geometry::Size;

    fn frame_strategy() -> impl Strategy<Value = Frame> {
        (1.0f32..1000.0, 1.0f32..1000.0, -500.0f32..500.0, -500.0f32..500.0)
            .prop_map(|(w, h, x, y)| Frame::new(Size::new(w, h)).with_position(Point::new(x, y)))
    }

    fn kind_strategy() -> impl Strategy<Value = ShapeKind> {
        prop_oneof![
            Just(ShapeKind::Circle),
            Just(ShapeKind::Square),
            Just(ShapeKind::Triangle),
        ]
    }

    /// Center of the shape's bounding box for a given position.
    fn bounding_center(position: ShapePosition, size: f32) -> Point {
        match position {
            ShapePosition::Circle { center, .. } => center,
            ShapePosition::Square { top_left, side } => {
                Point::new(top_left.x() + side / 2.0, top_left.y() + side / 2.0)
            }
            ShapePosition::Triangle { points, .. } => {
                Point::new(points[0].x(), points[0].y() + size / 2.0)
            }
        }
    }

    proptest! {
        #[test]
        fn shapes_are_centered_in_frame(
            kind in kind_strategy(),
            size in 1.0f32..500.0,
            frame in frame_strategy(),
        ) {
            let position = kind.position(size, Some(frame));
            let center = bounding_center(position, size);
            prop_assert!(approx_eq!(f32, center.x(), frame.center().x(), epsilon = 0.01));
            prop_assert!(approx_eq!(f32, center.y(), frame.center().y(), epsilon = 0.01));
        }

        #[test]
        fn position_is_pure(kind in kind_strategy(), size in 1.0f32..500.0, frame in frame_strategy()) {
            prop_assert_eq!(kind.position(size, Some(frame)), kind.position(size, Some(frame)));
        }
    }
}
