//! Unique handles for drawables and canvases.
//!
//! Every [`Drawable`](crate::draw::Drawable) and every
//! [`Canvas`](crate::draw::Canvas) receives a random UUID when it is
//! constructed. Canvases use [`DrawableId`] to find and remove children;
//! drawables use [`CanvasId`] as a read-only record of the canvas they
//! currently belong to.

use std::fmt;

use uuid::Uuid;

/// Identity of a drawable, assigned once at construction.
///
/// Clones of a drawable share its id, so an id names one logical element.
///
/// # Examples
///
/// ```
/// use emblem_core::identifier::DrawableId;
///
/// let a = DrawableId::new();
/// let b = DrawableId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(Uuid);

impl DrawableId {
    /// Creates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DrawableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DrawableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasId(Uuid);

impl CanvasId {
    /// Creates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CanvasId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CanvasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
