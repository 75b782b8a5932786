//! Error types for constructing drawables.

use thiserror::Error;

/// Errors raised while constructing shapes and captions.
///
/// Both variants are reported at the point of construction; rendering itself
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("caption `{value}` is {len} characters long, at most {max} are allowed")]
    CaptionTooLong {
        value: String,
        len: usize,
        max: usize,
    },

    #[error("unsupported shape kind `{0}`")]
    UnsupportedShapeKind(String),
}
