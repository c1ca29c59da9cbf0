use kurbo::Shape as _;

use crate::{
    foundation::core::{Affine, BezPath, Point, Rect, Rgba8},
    scene::place::{Placement, union_bounds},
};

/// Path flattening tolerance for curves built from analytic shapes.
pub const PATH_TOLERANCE: f64 = 1e-4;

/// Estimated advance of one text glyph relative to its height.
pub const LABEL_ASPECT: f64 = 0.6;

/// Anything whose ink color can be changed in place.
pub trait Recolor {
    fn recolor(&mut self, color: Rgba8);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Fill(FillRule),
    Stroke { width: f64 },
}

/// A single painted path.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub path: BezPath,
    pub paint: Paint,
    pub color: Rgba8,
}

impl Shape {
    pub fn filled(path: BezPath, color: Rgba8) -> Self {
        Self {
            path,
            paint: Paint::Fill(FillRule::NonZero),
            color,
        }
    }

    pub fn stroked(path: BezPath, width: f64, color: Rgba8) -> Self {
        Self {
            path,
            paint: Paint::Stroke { width },
            color,
        }
    }

    /// Straight segment from `a` to `b`.
    pub fn segment(a: Point, b: Point, width: f64, color: Rgba8) -> Self {
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        Self::stroked(path, width, color)
    }

    /// `outer` with `hole` removed, painted even-odd so the hole stays empty.
    pub fn cutout(outer: &impl kurbo::Shape, hole: &impl kurbo::Shape, color: Rgba8) -> Self {
        let mut path = outer.to_path(PATH_TOLERANCE);
        path.extend(hole.path_elements(PATH_TOLERANCE));
        Self {
            path,
            paint: Paint::Fill(FillRule::EvenOdd),
            color,
        }
    }

    pub fn stroke_width(&self) -> Option<f64> {
        match self.paint {
            Paint::Stroke { width } => Some(width),
            Paint::Fill(_) => None,
        }
    }
}

impl Placement for Shape {
    fn bounds(&self) -> Rect {
        self.path.bounding_box()
    }

    fn apply_affine(&mut self, affine: Affine) {
        self.path.apply_affine(affine);
    }
}

impl Recolor for Shape {
    fn recolor(&mut self, color: Rgba8) {
        self.color = color;
    }
}

/// A run of text drawn as one glyph box.
///
/// Text shaping is left to the renderer; the box is estimated from
/// [`LABEL_ASPECT`] so layout stays deterministic without fonts.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub rect: Rect,
    pub color: Rgba8,
}

impl Label {
    /// Label of the given glyph height, centered on the origin.
    pub fn new(text: impl Into<String>, height: f64, color: Rgba8) -> Self {
        let text = text.into();
        let chars = text.chars().count().max(1) as f64;
        let width = LABEL_ASPECT * height * chars;
        Self {
            text,
            rect: Rect::from_center_size(Point::ORIGIN, (width, height)),
            color,
        }
    }
}

impl Placement for Label {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn apply_affine(&mut self, affine: Affine) {
        self.rect = affine.transform_rect_bbox(self.rect);
    }
}

impl Recolor for Label {
    fn recolor(&mut self, color: Rgba8) {
        self.color = color;
    }
}

/// Ordered composite; children paint in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub name: Option<String>,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            children: Vec::new(),
        }
    }

    pub fn with(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn is_empty(&self) -> bool {
        self.children.iter().all(Node::is_empty)
    }

    pub(crate) fn bounds_opt(&self) -> Option<Rect> {
        union_bounds(self.children.iter().filter_map(Node::bounds_opt))
    }
}

impl Placement for Group {
    fn bounds(&self) -> Rect {
        self.bounds_opt().unwrap_or(Rect::ZERO)
    }

    fn apply_affine(&mut self, affine: Affine) {
        for child in &mut self.children {
            child.apply_affine(affine);
        }
    }
}

impl Recolor for Group {
    fn recolor(&mut self, color: Rgba8) {
        for child in &mut self.children {
            child.recolor(color);
        }
    }
}

/// A drawable scene node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Shape(Shape),
    Label(Label),
    Group(Group),
}

impl Node {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Group(g) => g.is_empty(),
            Self::Shape(_) | Self::Label(_) => false,
        }
    }

    pub(crate) fn bounds_opt(&self) -> Option<Rect> {
        match self {
            Self::Shape(s) => Some(s.bounds()),
            Self::Label(l) => Some(l.bounds()),
            Self::Group(g) => g.bounds_opt(),
        }
    }

    /// Depth-first visit of every leaf (shapes and labels).
    pub fn for_each_leaf<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        match self {
            Self::Group(g) => {
                for child in &g.children {
                    child.for_each_leaf(f);
                }
            }
            Self::Shape(_) | Self::Label(_) => f(self),
        }
    }

    pub fn leaf_count(&self) -> usize {
        let mut n = 0;
        self.for_each_leaf(&mut |_| n += 1);
        n
    }
}

impl Placement for Node {
    fn bounds(&self) -> Rect {
        self.bounds_opt().unwrap_or(Rect::ZERO)
    }

    fn apply_affine(&mut self, affine: Affine) {
        match self {
            Self::Shape(s) => s.apply_affine(affine),
            Self::Label(l) => l.apply_affine(affine),
            Self::Group(g) => g.apply_affine(affine),
        }
    }
}

impl Recolor for Node {
    fn recolor(&mut self, color: Rgba8) {
        match self {
            Self::Shape(s) => s.recolor(color),
            Self::Label(l) => l.recolor(color),
            Self::Group(g) => g.recolor(color),
        }
    }
}

impl From<Shape> for Node {
    fn from(value: Shape) -> Self {
        Self::Shape(value)
    }
}

impl From<Label> for Node {
    fn from(value: Label) -> Self {
        Self::Label(value)
    }
}

impl From<Group> for Node {
    fn from(value: Group) -> Self {
        Self::Group(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
