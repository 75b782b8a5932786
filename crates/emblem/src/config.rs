//! Configuration types for Emblem logo rendering.
//!
//! This module provides configuration structures that control the canvas,
//! the shape and caption defaults and the output. All types implement
//! [`serde::Deserialize`] and every field has a default, so a configuration
//! file only needs to mention what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`CanvasConfig`] - Canvas size and background color.
//! - [`ShapeConfig`] - Shape size.
//! - [`TextConfig`] - Caption font scale.
//! - [`OutputConfig`] - Output path and minimization.
//!
//! # Example
//!
//! ```
//! # use emblem::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 300.0);
//! assert!(config.canvas().background_color().is_ok());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use emblem_core::draw::{
    DEFAULT_BACKGROUND, DEFAULT_CANVAS_SIZE, DEFAULT_FONT_SCALE, DEFAULT_SHAPE_SIZE,
};

use crate::color::{ColorError, CssColor};

/// Default output file for rendered logos.
pub const DEFAULT_OUTPUT_PATH: &str = "logo.svg";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    canvas: CanvasConfig,

    #[serde(default)]
    shape: ShapeConfig,

    #[serde(default)]
    text: TextConfig,

    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        canvas: CanvasConfig,
        shape: ShapeConfig,
        text: TextConfig,
        output: OutputConfig,
    ) -> Self {
        Self {
            canvas,
            shape,
            text,
            output,
        }
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn shape(&self) -> &ShapeConfig {
        &self.shape
    }

    pub fn text(&self) -> &TextConfig {
        &self.text
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns a mutable reference to the output section.
    ///
    /// Used by front ends to apply command-line overrides.
    pub fn output_mut(&mut self) -> &mut OutputConfig {
        &mut self.output
    }
}

/// Canvas dimensions and background.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
    background_color: String,
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32, background_color: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background_color: background_color.into(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the validated background color.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a color name or hex value.
    pub fn background_color(&self) -> Result<CssColor, ColorError> {
        CssColor::parse(&self.background_color)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE.width(),
            height: DEFAULT_CANVAS_SIZE.height(),
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

/// Shape settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Edge length or diameter of the shape.
    size: f32,
}

impl ShapeConfig {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SHAPE_SIZE,
        }
    }
}

/// Caption settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Fraction of the canvas height used as the base font size.
    font_scale: f32,
}

impl TextConfig {
    pub fn new(font_scale: f32) -> Self {
        Self { font_scale }
    }

    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_scale: DEFAULT_FONT_SCALE,
        }
    }
}

/// Where and how the rendered document is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    path: PathBuf,
    minimize: bool,
}

impl OutputConfig {
    pub fn new(path: impl Into<PathBuf>, minimize: bool) -> Self {
        Self {
            path: path.into(),
            minimize,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn minimize(&self) -> bool {
        self.minimize
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    pub fn set_minimize(&mut self, minimize: bool) {
        self.minimize = minimize;
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            minimize: false,
        }
    }
}
