//! Error types for Emblem operations.
//!
//! This module provides the main error type [`EmblemError`] which wraps the
//! failures that can occur while turning a request into a logo.

use std::io;

use thiserror::Error;

use crate::color::ColorError;

/// The main error type for Emblem operations.
#[derive(Debug, Error)]
pub enum EmblemError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Construction(#[from] emblem_core::Error),

    #[error("{field}: {source}")]
    Color {
        field: &'static str,
        #[source]
        source: ColorError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EmblemError {
    /// Create a new `Color` error for the named request field.
    pub fn color(field: &'static str, source: ColorError) -> Self {
        Self::Color { field, source }
    }
}
