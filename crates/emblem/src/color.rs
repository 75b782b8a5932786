//! Color validation for user-supplied logo colors.
//!
//! Emblem accepts two color notations: CSS color names (`"tomato"`,
//! `"RebeccaPurple"`) and hex values (`"#f00"`, `"#ff000080"`). Strings are
//! parsed with the `color` crate to make sure they name a real color; other
//! CSS notations such as `rgb(...)` are rejected even though browsers accept
//! them.

use std::{fmt, str::FromStr};

use color::DynamicColor;
use thiserror::Error;

/// Reasons a color string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color `{input}`: {reason}")]
    Invalid { input: String, reason: String },

    #[error("unsupported color format `{0}`, expected a color name or a hex value")]
    UnsupportedFormat(String),
}

/// The notation a [`CssColor`] was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// A CSS named color such as `navy`.
    Name,
    /// A `#`-prefixed hex value.
    Hex,
}

/// A validated color string.
///
/// The original spelling is kept and is what ends up in the SVG output.
///
/// # Examples
///
/// ```
/// use emblem::color::{ColorFormat, CssColor};
///
/// let named = CssColor::parse("tomato").unwrap();
/// assert_eq!(named.format(), ColorFormat::Name);
///
/// let hex = CssColor::parse("#ff8000").unwrap();
/// assert_eq!(hex.as_str(), "#ff8000");
///
/// assert!(CssColor::parse("rgb(255, 0, 0)").is_err());
/// assert!(CssColor::parse("not-a-color").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssColor {
    value: String,
    format: ColorFormat,
}

impl CssColor {
    /// Validates a color name or hex value.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedFormat`] for notations other than
    /// names and hex values, and [`ColorError::Invalid`] when the string does
    /// not describe a known color.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let value = input.trim();

        let format = if value.starts_with('#') {
            ColorFormat::Hex
        } else if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()) {
            ColorFormat::Name
        } else {
            return Err(ColorError::UnsupportedFormat(input.to_string()));
        };

        DynamicColor::from_str(&value.to_ascii_lowercase()).map_err(|err| ColorError::Invalid {
            input: input.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Self {
            value: value.to_string(),
            format,
        })
    }

    /// Returns the color as written by the user.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn format(&self) -> ColorFormat {
        self.format
    }
}

impl FromStr for CssColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Returns `true` if `input` is a color name or hex value Emblem accepts.
pub fn is_valid_color(input: &str) -> bool {
    CssColor::parse(input).is_ok()
}
