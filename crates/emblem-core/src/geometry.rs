//! Geometric primitives for logo positioning.
//!
//! This module provides the small set of geometric types and helpers the
//! drawables need to place themselves inside a canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Frame`] - The size and top-left position of a container
//! - [`round_half`], [`format_half`], [`round_output`], [`degrees_to_radians`] - numeric helpers
//!
//! # Coordinate System
//!
//! Emblem uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```

use std::f32::consts::PI;

/// Rounds a value to the nearest multiple of 0.5.
///
/// Halves round away from zero, so `115.25` becomes `115.5`.
///
/// # Examples
///
/// ```
/// # use emblem_core::geometry::round_half;
/// assert_eq!(round_half(115.47), 115.5);
/// assert_eq!(round_half(2.2), 2.0);
/// ```
pub fn round_half(value: f32) -> f32 {
    (value * 2.0).round() / 2.0
}

/// Rounds a value to the nearest 0.5 and formats it with one decimal place.
///
/// # Examples
///
/// ```
/// # use emblem_core::geometry::format_half;
/// assert_eq!(format_half(115.47), "115.5");
/// assert_eq!(format_half(100.0), "100.0");
/// ```
pub fn format_half(value: f32) -> String {
    format!("{:.1}", round_half(value))
}

/// Rounds a value to four decimal places for printing in markup.
///
/// `f32` products such as `0.4 * 3.0 * 1.5` carry noise in the last digit.
/// Rounding before formatting keeps that noise out of the document.
///
/// # Examples
///
/// ```
/// # use emblem_core::geometry::round_output;
/// assert_eq!(round_output(0.4 * 3.0 * 1.5).to_string(), "1.8");
/// assert_eq!(round_output(92.25).to_string(), "92.25");
/// ```
pub fn round_output(value: f32) -> f32 {
    let rounded = (f64::from(value) * 10_000.0).round() / 10_000.0;
    // Adding zero turns a rounded `-0.0` into `0.0`.
    rounded as f32 + 0.0
}

/// Converts an angle in degrees to radians.
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// A 2D point in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use emblem_core::geometry::Point;
/// let p = Point::new(10.0, 20.0).add_point(Point::new(5.0, 5.0));
/// assert_eq!(p.x(), 15.0);
/// assert_eq!(p.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Width and height of a rectangular area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

/// The area a container offers to its children: a size and a top-left position.
///
/// Drawables compute their coordinates from the frame of the canvas they
/// belong to. A frame is a plain value and is always read from the canvas at
/// the moment of use.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    size: Size,
    position: Point,
}

impl Frame {
    /// Creates a frame of the given size at the origin.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            position: Point::default(),
        }
    }

    /// Set the top-left position of the frame (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn size(self) -> Size {
        self.size
    }

    /// Returns the top-left corner of the frame.
    pub fn position(self) -> Point {
        self.position
    }

    /// Returns the center point of the frame.
    pub fn center(self) -> Point {
        self.position.add_point(Point::new(
            self.size.width() / 2.0,
            self.size.height() / 2.0,
        ))
    }
}
