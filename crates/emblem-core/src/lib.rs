//! Emblem Core Types and Definitions
//!
//! This crate provides the rendering model behind Emblem logos. It includes:
//!
//! - **Geometry**: Points, sizes, frames and small numeric helpers ([`geometry`] module)
//! - **Identifiers**: Unique drawable and canvas handles ([`identifier`] module)
//! - **Draw**: Shapes, captions and the canvas that composes them ([`draw`] module)
//! - **Markup**: Post-processing of rendered SVG text ([`markup`] module)
//!
//! # Example
//!
//! ```
//! use emblem_core::draw::{Canvas, Shape, ShapeKind, Text};
//!
//! # fn main() -> Result<(), emblem_core::Error> {
//! let mut canvas = Canvas::default();
//! canvas.add_child(Shape::new(ShapeKind::Circle, "green").with_size(200.0));
//! canvas.add_child(Text::new("SVG", "red")?);
//!
//! let svg = canvas.render();
//! assert!(svg.contains(r#"<circle cx="150" cy="100" r="100" fill="green" />"#));
//! # Ok(())
//! # }
//! ```

pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod markup;

mod error;

pub use error::Error;
