//! Emblem - generate simple SVG logos.
//!
//! A logo is one shape (circle, square or triangle) with an optional caption
//! of up to three characters centered on top of it. This crate validates the
//! user's choices, builds the [`Canvas`](draw::Canvas) and renders it.

pub mod color;
pub mod config;

mod error;

pub use emblem_core::{Error as ConstructionError, draw, geometry, identifier, markup};

pub use error::EmblemError;

use log::{debug, info};

use color::CssColor;
use config::AppConfig;
use draw::{Canvas, Shape, ShapeKind, Text};
use geometry::Size;

/// Caption used when the user does not provide one.
pub const DEFAULT_TEXT: &str = "SVG";

/// Caption color used when the user does not provide one.
pub const DEFAULT_TEXT_COLOR: &str = "tomato";

/// Shape fill color used when the user does not provide one.
pub const DEFAULT_FILL_COLOR: &str = "gray";

/// The user's choices for one logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoRequest {
    pub shape: ShapeKind,
    pub text: String,
    pub text_color: String,
    pub fill_color: String,
}

impl LogoRequest {
    /// Creates a request for the given shape with the default caption and colors.
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            text: DEFAULT_TEXT.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            fill_color: DEFAULT_FILL_COLOR.to_string(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = color.into();
        self
    }
}

/// Builder for turning [`LogoRequest`]s into SVG documents.
///
/// # Examples
///
/// ```
/// use emblem::{LogoBuilder, LogoRequest, config::AppConfig, draw::ShapeKind};
///
/// let builder = LogoBuilder::new(AppConfig::default());
/// let request = LogoRequest::new(ShapeKind::Circle)
///     .with_text("SVG")
///     .with_text_color("red")
///     .with_fill_color("green");
///
/// let svg = builder.render_svg(&request).expect("valid request");
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains(r#"fill="green""#));
/// ```
#[derive(Debug, Default)]
pub struct LogoBuilder {
    config: AppConfig,
}

impl LogoBuilder {
    /// Create a new logo builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validate a request and build the canvas for it.
    ///
    /// The shape is added first and the caption second, so the caption is
    /// painted on top.
    ///
    /// # Errors
    ///
    /// Returns [`EmblemError::Color`] if any color is not a color name or hex
    /// value, and [`EmblemError::Construction`] if the caption is too long.
    pub fn build_canvas(&self, request: &LogoRequest) -> Result<Canvas, EmblemError> {
        let background = self
            .config
            .canvas()
            .background_color()
            .map_err(|err| EmblemError::color("background color", err))?;
        let fill = CssColor::parse(&request.fill_color)
            .map_err(|err| EmblemError::color("fill color", err))?;
        let text_color = CssColor::parse(&request.text_color)
            .map_err(|err| EmblemError::color("text color", err))?;

        let text = Text::new(request.text.as_str(), text_color.as_str())?
            .with_font_scale(self.config.text().font_scale());
        let shape = Shape::new(request.shape, fill.as_str()).with_size(self.config.shape().size());

        let canvas_config = self.config.canvas();
        let mut canvas = Canvas::new(
            background.as_str(),
            Size::new(canvas_config.width(), canvas_config.height()),
        );
        canvas.add_child(shape);
        canvas.add_child(text);

        debug!(shape:% = request.shape, children_count = canvas.len(); "Canvas built");
        Ok(canvas)
    }

    /// Render a request to an SVG string.
    ///
    /// The output is minimized when the configuration asks for it.
    ///
    /// # Errors
    ///
    /// See [`build_canvas`](Self::build_canvas).
    pub fn render_svg(&self, request: &LogoRequest) -> Result<String, EmblemError> {
        info!(shape:% = request.shape; "Rendering logo");
        let canvas = self.build_canvas(request)?;

        let svg = if self.config.output().minimize() {
            canvas.render_minimized()
        } else {
            canvas.render()
        };

        debug!(bytes = svg.len(); "Logo rendered");
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = LogoRequest::new(ShapeKind::Triangle);

        assert_eq!(request.text, DEFAULT_TEXT);
        assert_eq!(request.text_color, DEFAULT_TEXT_COLOR);
        assert_eq!(request.fill_color, DEFAULT_FILL_COLOR);
    }

    #[test]
    fn test_build_canvas_adds_shape_then_caption() {
        let builder = LogoBuilder::default();
        let canvas = builder
            .build_canvas(&LogoRequest::new(ShapeKind::Square))
            .expect("default request is valid");

        let children = canvas.children();
        assert_eq!(children.len(), 2);
        assert_eq!(
            children[0].as_shape().map(Shape::kind),
            Some(ShapeKind::Square)
        );
        assert_eq!(children[1].as_text().map(Text::value), Some("SVG"));
    }

    #[test]
    fn test_invalid_fill_color() {
        let builder = LogoBuilder::default();
        let request = LogoRequest::new(ShapeKind::Circle).with_fill_color("not-a-color");

        let err = builder.render_svg(&request).expect_err("color must be rejected");
        assert!(matches!(err, EmblemError::Color { field: "fill color", .. }));
    }

    #[test]
    fn test_caption_too_long() {
        let builder = LogoBuilder::default();
        let request = LogoRequest::new(ShapeKind::Circle).with_text("LOGO");

        let err = builder.render_svg(&request).expect_err("caption must be rejected");
        assert!(matches!(
            err,
            EmblemError::Construction(ConstructionError::CaptionTooLong { len: 4, .. })
        ));
    }
}
