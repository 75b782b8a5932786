//! Caption rendering for logos.
//!
//! A [`Text`] is a caption of at most [`MAX_CAPTION_LEN`] characters, drawn
//! centered in its container as an SVG `<text>` element. The anchor and
//! baseline are both set to `middle` so the computed point is the visual
//! center of the caption rather than a corner.
//!
//! # Font size
//!
//! Unless a fixed size is set with [`Text::with_font_size`], the font size
//! follows the container height:
//!
//! | Caption length | Font size                   |
//! |----------------|-----------------------------|
//! | 1              | `scale × height × 2`        |
//! | 2              | `scale × height × 1.5`      |
//! | 0 or 3         | `scale × height`            |
//!
//! Outside a container the size is [`BASE_FONT_SIZE`].

use std::fmt;

use log::trace;

use crate::{
    Error,
    draw::Placement,
    geometry::{Frame, Point, round_output},
    identifier::{CanvasId, DrawableId},
    markup::{escape_attr, escape_text},
};

/// Longest caption that fits inside the standard shape sizes.
pub const MAX_CAPTION_LEN: usize = 3;

/// Fraction of the container height used as the base font size.
pub const DEFAULT_FONT_SCALE: f32 = 0.4;

/// Font size used when a caption is not inside a container.
pub const BASE_FONT_SIZE: f32 = 40.0;

/// Horizontal anchor of a caption (`text-anchor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        })
    }
}

/// Vertical alignment of a caption (`dominant-baseline`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Auto,
    Middle,
    Hanging,
}

impl fmt::Display for TextBaseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Middle => "middle",
            Self::Hanging => "hanging",
        })
    }
}

/// Where and how a caption is anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPosition {
    pub point: Point,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
}

/// A short caption with its own fill color.
///
/// # Examples
///
/// ```
/// # use emblem_core::draw::Text;
/// # fn main() -> Result<(), emblem_core::Error> {
/// let caption = Text::new("SVG", "white")?;
/// assert_eq!(caption.value(), "SVG");
///
/// // Four characters do not fit.
/// assert!(Text::new("LOGO", "white").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    id: DrawableId,
    parent: Option<CanvasId>,
    value: String,
    color: String,
    scale: f32,
    fixed_font_size: Option<f32>,
    placement: Placement,
}

impl Text {
    /// Creates a caption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CaptionTooLong`] if `value` has more than
    /// [`MAX_CAPTION_LEN`] characters.
    pub fn new(value: impl Into<String>, color: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        let len = value.chars().count();
        if len > MAX_CAPTION_LEN {
            return Err(Error::CaptionTooLong {
                value,
                len,
                max: MAX_CAPTION_LEN,
            });
        }

        Ok(Self {
            id: DrawableId::new(),
            parent: None,
            value,
            color: color.into(),
            scale: DEFAULT_FONT_SCALE,
            fixed_font_size: None,
            placement: Placement::default(),
        })
    }

    /// Sets the fraction of the container height used for the font size.
    pub fn with_font_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Uses a fixed font size regardless of the container.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.fixed_font_size = Some(size);
        self
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    pub fn parent(&self) -> Option<CanvasId> {
        self.parent
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn font_scale(&self) -> f32 {
        self.scale
    }

    /// Font size of the caption inside a container frame.
    pub fn font_size_in(&self, frame: Option<Frame>) -> f32 {
        if let Some(size) = self.fixed_font_size {
            return size;
        }
        let Some(frame) = frame else {
            return BASE_FONT_SIZE;
        };
        let boost = match self.value.chars().count() {
            1 => 2.0,
            2 => 1.5,
            _ => 1.0,
        };
        self.scale * frame.size().height() * boost
    }

    /// Anchor point of the caption inside a container frame.
    ///
    /// Without a frame the caption sits at the origin.
    pub fn position_in(&self, frame: Option<Frame>) -> TextPosition {
        let point = match (self.placement, frame) {
            (Placement::Centered, Some(frame)) => frame.center(),
            (Placement::Centered, None) => Point::default(),
        };
        TextPosition {
            point,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
        }
    }

    /// Renders the caption when it is not inside a canvas.
    pub fn render(&self) -> String {
        self.render_in(None)
    }

    /// Renders the caption inside a container frame.
    ///
    /// Empty captions still produce an (empty) `<text>` element.
    pub fn render_in(&self, frame: Option<Frame>) -> String {
        let TextPosition {
            point,
            anchor,
            baseline,
        } = self.position_in(frame);
        let font_size = self.font_size_in(frame);
        trace!(value = self.value, font_size; "Rendering caption");

        format!(
            r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{baseline}" text-anchor="{anchor}" fill="{}">{}</text>"#,
            round_output(point.x()),
            round_output(point.y()),
            round_output(font_size),
            escape_attr(&self.color),
            escape_text(&self.value),
        )
    }

    pub(super) fn set_parent(&mut self, parent: Option<CanvasId>) {
        self.parent = parent;
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::geometry::Size;

    fn canvas_frame() -> Frame {
        Frame::new(Size::new(300.0, 200.0))
    }

    #[test]
    fn test_caption_length_limit() {
        assert!(Text::new("SVG", "red").is_ok());
        assert!(Text::new("", "red").is_ok());

        let err = Text::new("TEST", "red").expect_err("four characters must be rejected");
        assert_eq!(
            err,
            Error::CaptionTooLong {
                value: "TEST".to_string(),
                len: 4,
                max: MAX_CAPTION_LEN,
            }
        );
    }

    #[test]
    fn test_caption_length_counts_characters() {
        assert!(Text::new("äöü", "red").is_ok());
        assert!(Text::new("日本語", "red").is_ok());
        assert!(Text::new("日本語!", "red").is_err());
    }

    #[test]
    fn test_render_centered_in_frame() {
        let text = Text::new("SVG", "red").expect("valid caption");

        assert_eq!(
            text.render_in(Some(canvas_frame())),
            r#"<text x="150" y="100" font-size="80" dominant-baseline="middle" text-anchor="middle" fill="red">SVG</text>"#
        );
    }

    #[test]
    fn test_font_size_boost_for_short_captions() {
        let frame = Some(canvas_frame());
        let one = Text::new("A", "red").expect("valid caption");
        let two = Text::new("AB", "red").expect("valid caption");
        let three = Text::new("ABC", "red").expect("valid caption");
        let empty = Text::new("", "red").expect("valid caption");

        assert_approx_eq!(f32, one.font_size_in(frame), 160.0);
        assert_approx_eq!(f32, two.font_size_in(frame), 120.0);
        assert_approx_eq!(f32, three.font_size_in(frame), 80.0);
        assert_approx_eq!(f32, empty.font_size_in(frame), 80.0);
    }

    #[test]
    fn test_font_scale_and_fixed_size() {
        let frame = Some(canvas_frame());
        let scaled = Text::new("ABC", "red")
            .expect("valid caption")
            .with_font_scale(0.25);
        assert_approx_eq!(f32, scaled.font_size_in(frame), 50.0);

        let fixed = Text::new("A", "red")
            .expect("valid caption")
            .with_font_size(40.0);
        assert_approx_eq!(f32, fixed.font_size_in(frame), 40.0);
        assert_approx_eq!(f32, fixed.font_size_in(None), 40.0);
    }

    #[test]
    fn test_small_frames_print_clean_font_sizes() {
        let text = Text::new("AB", "red").expect("valid caption");

        let tiny = text.render_in(Some(Frame::new(Size::new(3.0, 3.0))));
        assert!(tiny.contains(r#"x="1.5" y="1.5" font-size="1.8""#), "{tiny}");

        let small = text.render_in(Some(Frame::new(Size::new(6.0, 6.0))));
        assert!(small.contains(r#"font-size="3.6""#), "{small}");
    }

    #[test]
    fn test_unattached_caption_defaults_to_origin() {
        let text = Text::new("SVG", "red").expect("valid caption");

        assert_eq!(
            text.render(),
            r#"<text x="0" y="0" font-size="40" dominant-baseline="middle" text-anchor="middle" fill="red">SVG</text>"#
        );
    }

    #[test]
    fn test_empty_caption_renders_empty_element() {
        let text = Text::new("", "red").expect("valid caption");

        assert_eq!(
            text.render_in(Some(canvas_frame())),
            r#"<text x="150" y="100" font-size="80" dominant-baseline="middle" text-anchor="middle" fill="red"></text>"#
        );
    }

    #[test]
    fn test_caption_content_is_escaped() {
        let text = Text::new("<&>", "red").expect("valid caption");
        assert!(text.render().ends_with(">&lt;&amp;&gt;</text>"));
    }

    #[test]
    fn test_position_follows_frame_offset() {
        let frame = canvas_frame().with_position(Point::new(20.0, 10.0));
        let text = Text::new("SVG", "red").expect("valid caption");

        let position = text.position_in(Some(frame));
        assert_eq!(position.point, Point::new(170.0, 110.0));
        assert_eq!(position.anchor, TextAnchor::Middle);
        assert_eq!(position.baseline, TextBaseline::Middle);
    }
}
