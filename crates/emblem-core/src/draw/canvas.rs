//! The root container of a logo.

use log::{debug, trace};

use crate::{
    draw::Drawable,
    geometry::{Frame, Point, Size, round_output},
    identifier::{CanvasId, DrawableId},
    markup::{escape_attr, minimize},
};

/// Background color of a canvas created with [`Canvas::default`].
pub const DEFAULT_BACKGROUND: &str = "white";

/// Size of a canvas created with [`Canvas::default`].
pub const DEFAULT_CANVAS_SIZE: Size = Size::new(300.0, 200.0);

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// An SVG document holding an ordered list of drawables.
///
/// Children are painted in insertion order, so the first child added ends up
/// underneath the others. The canvas size and position are fixed once it is
/// built; children are added and removed freely.
///
/// # Examples
///
/// ```
/// use emblem_core::draw::{Canvas, Shape, ShapeKind, Text};
/// use emblem_core::geometry::Size;
///
/// # fn main() -> Result<(), emblem_core::Error> {
/// let mut canvas = Canvas::new("black", Size::new(300.0, 200.0));
/// let square = canvas.add_child(Shape::new(ShapeKind::Square, "gold").with_size(150.0));
/// canvas.add_child(Text::new("AB", "black")?);
///
/// assert_eq!(canvas.len(), 2);
/// assert!(canvas.render().contains(r#"<rect x="75" y="25""#));
///
/// let square = canvas.remove_child(square).expect("square was added");
/// assert_eq!(square.parent(), None);
/// assert_eq!(canvas.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    id: CanvasId,
    background: String,
    frame: Frame,
    children: Vec<Drawable>,
}

impl Canvas {
    /// Creates an empty canvas at the origin.
    pub fn new(background: impl Into<String>, size: Size) -> Self {
        Self {
            id: CanvasId::new(),
            background: background.into(),
            frame: Frame::new(size),
            children: Vec::new(),
        }
    }

    /// Set the top-left position of the canvas (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.frame = self.frame.with_position(position);
        self
    }

    pub fn id(&self) -> CanvasId {
        self.id
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn size(&self) -> Size {
        self.frame.size()
    }

    pub fn position(&self) -> Point {
        self.frame.position()
    }

    /// Returns the frame children are laid out in.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Returns the children in paint order.
    pub fn children(&self) -> &[Drawable] {
        &self.children
    }

    /// Looks up a child by identity.
    pub fn child(&self, id: DrawableId) -> Option<&Drawable> {
        self.children.iter().find(|child| child.id() == id)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a drawable and marks this canvas as its parent.
    ///
    /// A child already holding the same id is replaced, so the drawable moves
    /// to the end of the paint order and each id appears at most once.
    /// Returns the drawable's id for later lookup or removal.
    pub fn add_child(&mut self, drawable: impl Into<Drawable>) -> DrawableId {
        let mut drawable = drawable.into();
        drawable.set_parent(Some(self.id));
        let id = drawable.id();
        if let Some(index) = self.children.iter().position(|child| child.id() == id) {
            self.children.remove(index);
            debug!(canvas:% = self.id, child:% = id; "Replacing child with the same id");
        }
        debug!(canvas:% = self.id, child:% = id; "Child added");
        self.children.push(drawable);
        id
    }

    /// Removes a child by identity and hands it back detached.
    ///
    /// The remaining children keep their relative order. Returns `None` if no
    /// child has the given id.
    pub fn remove_child(&mut self, id: DrawableId) -> Option<Drawable> {
        let index = self.children.iter().position(|child| child.id() == id)?;
        let mut drawable = self.children.remove(index);
        drawable.set_parent(None);
        debug!(canvas:% = self.id, child:% = id; "Child removed");
        Some(drawable)
    }

    /// Returns the frame a drawable should lay itself out in.
    ///
    /// This is the canvas frame when the drawable belongs to this canvas and
    /// `None` otherwise, which sends the drawable to its unattached default.
    pub fn frame_for(&self, drawable: &Drawable) -> Option<Frame> {
        (drawable.parent() == Some(self.id)).then_some(self.frame)
    }

    /// Renders a single child the way it appears in the full document.
    pub fn render_child(&self, id: DrawableId) -> Option<String> {
        self.child(id)
            .map(|child| child.render_in(self.frame_for(child)))
    }

    /// Renders the full SVG document.
    ///
    /// Child fragments are joined with newlines in paint order. Children that
    /// produce no markup are skipped.
    pub fn render(&self) -> String {
        let children = self
            .children
            .iter()
            .map(|child| child.render_in(self.frame_for(child)))
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        trace!(canvas:% = self.id, children_count = self.children.len(); "Rendering canvas");

        let size = self.frame.size();
        format!(
            r#"<svg version="1.1" style="background-color:{}" width="{}" height="{}" xmlns="{SVG_NAMESPACE}">{children}</svg>"#,
            escape_attr(&self.background),
            round_output(size.width()),
            round_output(size.height()),
        )
    }

    /// Renders the document and collapses whitespace between tags.
    pub fn render_minimized(&self) -> String {
        minimize(&self.render())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND, DEFAULT_CANVAS_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Shape, ShapeKind, Text};

    fn circle() -> Shape {
        Shape::new(ShapeKind::Circle, "green").with_size(200.0)
    }

    fn caption() -> Text {
        Text::new("SVG", "red").expect("valid caption")
    }

    #[test]
    fn test_empty_canvas() {
        let canvas = Canvas::default();

        assert!(canvas.is_empty());
        assert_eq!(
            canvas.render(),
            r#"<svg version="1.1" style="background-color:white" width="300" height="200" xmlns="http://www.w3.org/2000/svg"></svg>"#
        );
    }

    #[test]
    fn test_render_shape_and_caption() {
        let mut canvas = Canvas::default();
        canvas.add_child(circle());
        canvas.add_child(caption());

        assert_eq!(
            canvas.render(),
            concat!(
                r#"<svg version="1.1" style="background-color:white" width="300" height="200" xmlns="http://www.w3.org/2000/svg">"#,
                r#"<circle cx="150" cy="100" r="100" fill="green" />"#,
                "\n",
                r#"<text x="150" y="100" font-size="80" dominant-baseline="middle" text-anchor="middle" fill="red">SVG</text>"#,
                "</svg>",
            )
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut canvas = Canvas::new("black", Size::new(400.0, 400.0));
        canvas.add_child(Shape::new(ShapeKind::Triangle, "gold"));
        canvas.add_child(caption());

        assert_eq!(canvas.render(), canvas.render());
    }

    #[test]
    fn test_render_is_well_formed_xml() {
        let mut canvas = Canvas::default();
        canvas.add_child(Shape::new(ShapeKind::Triangle, "gold"));
        canvas.add_child(Text::new("<&", "red").expect("valid caption"));

        let svg = canvas.render();
        let document = roxmltree::Document::parse(&svg).expect("rendered SVG should parse");
        let root = document.root_element();

        assert_eq!(root.tag_name().name(), "svg");
        assert_eq!(root.tag_name().namespace(), Some(SVG_NAMESPACE));
        assert_eq!(root.children().filter(|n| n.is_element()).count(), 2);
        let text = root
            .children()
            .find(|n| n.has_tag_name((SVG_NAMESPACE, "text")))
            .expect("caption element");
        assert_eq!(text.text(), Some("<&"));
    }

    #[test]
    fn test_add_child_installs_parent() {
        let mut canvas = Canvas::default();
        let id = canvas.add_child(circle());

        let child = canvas.child(id).expect("child was added");
        assert_eq!(child.parent(), Some(canvas.id()));
        assert_eq!(canvas.frame_for(child), Some(canvas.frame()));
    }

    #[test]
    fn test_remove_child_clears_parent() {
        let mut canvas = Canvas::default();
        let id = canvas.add_child(circle());

        let removed = canvas.remove_child(id).expect("child was added");

        assert_eq!(removed.parent(), None);
        assert_eq!(canvas.frame_for(&removed), None);
        assert!(canvas.is_empty());
        assert_eq!(
            removed.render(),
            r#"<circle cx="100" cy="100" r="100" fill="green" />"#
        );
    }

    #[test]
    fn test_remove_unknown_child() {
        let mut canvas = Canvas::default();
        canvas.add_child(circle());

        assert!(canvas.remove_child(DrawableId::new()).is_none());
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_reattach_uses_new_canvas_only() {
        let mut first = Canvas::default();
        let mut second = Canvas::new("black", Size::new(500.0, 400.0));

        let id = first.add_child(Shape::new(ShapeKind::Square, "blue").with_size(150.0));
        assert_eq!(
            first.render_child(id).as_deref(),
            Some(r#"<rect x="75" y="25" width="150" height="150" fill="blue" />"#)
        );

        let square = first.remove_child(id).expect("square was added");
        let same_id = second.add_child(square);

        assert_eq!(same_id, id);
        assert!(first.child(id).is_none());
        assert_eq!(
            second.child(id).and_then(Drawable::parent),
            Some(second.id())
        );
        assert_eq!(
            second.render_child(id).as_deref(),
            Some(r#"<rect x="175" y="125" width="150" height="150" fill="blue" />"#)
        );
    }

    #[test]
    fn test_foreign_drawable_gets_no_frame() {
        let mut other = Canvas::default();
        let id = other.add_child(circle());
        let foreign = other.child(id).expect("child was added").clone();

        let canvas = Canvas::default();
        assert_eq!(canvas.frame_for(&foreign), None);
    }

    #[test]
    fn test_insertion_order_is_paint_order() {
        let mut canvas = Canvas::default();
        let shape_id = canvas.add_child(circle());
        let text_id = canvas.add_child(caption());

        let svg = canvas.render();
        let circle_at = svg.find("<circle").expect("circle rendered");
        let text_at = svg.find("<text").expect("text rendered");
        assert!(circle_at < text_at);

        let shape = canvas.remove_child(shape_id).expect("shape was added");
        canvas.add_child(shape);

        let ids: Vec<_> = canvas.children().iter().map(Drawable::id).collect();
        assert_eq!(ids, vec![text_id, shape_id]);

        let svg = canvas.render();
        assert!(svg.find("<text").expect("text rendered") < svg.find("<circle").expect("circle rendered"));
    }

    #[test]
    fn test_same_id_is_kept_once() {
        let mut canvas = Canvas::default();
        let shape = circle();
        let first = canvas.add_child(shape.clone());
        let text_id = canvas.add_child(caption());
        let second = canvas.add_child(shape.with_size(100.0));

        assert_eq!(first, second);
        assert_eq!(canvas.len(), 2);
        let ids: Vec<_> = canvas.children().iter().map(Drawable::id).collect();
        assert_eq!(ids, vec![text_id, first]);
        assert_eq!(
            canvas.render_child(first).as_deref(),
            Some(r#"<circle cx="150" cy="100" r="50" fill="green" />"#)
        );

        canvas.remove_child(first).expect("shape was added");
        assert!(canvas.child(first).is_none());
        assert!(!canvas.render().contains("<circle"));
    }

    #[test]
    fn test_children_use_canvas_position() {
        let mut canvas = Canvas::default().with_position(Point::new(10.0, 20.0));
        let id = canvas.add_child(caption());

        assert_eq!(canvas.position(), Point::new(10.0, 20.0));
        assert_eq!(
            canvas.render_child(id).as_deref(),
            Some(r#"<text x="160" y="120" font-size="80" dominant-baseline="middle" text-anchor="middle" fill="red">SVG</text>"#)
        );
    }

    #[test]
    fn test_no_stray_separators() {
        let mut canvas = Canvas::default();
        canvas.add_child(circle());

        let svg = canvas.render();
        assert!(!svg.contains(">\n<circle"));
        assert!(!svg.contains("/>\n</svg>"));
    }

    #[test]
    fn test_render_minimized() {
        let mut canvas = Canvas::default();
        canvas.add_child(circle());
        canvas.add_child(caption());

        let minimized = canvas.render_minimized();
        assert!(!minimized.contains('\n'));
        assert!(minimized.contains(r#"fill="green" /> <text"#));
    }
}
