use crate::{
    foundation::core::{Affine, Point, Rect, Rgba8},
    glyph::STEM_STROKE,
    scene::{
        node::{Node, Recolor, Shape},
        place::Placement,
    },
};

/// Stem length in multiples of the head size.
pub const STEM_LENGTH: f64 = 3.0;

/// Vertical stem, drawn upward from its origin.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteStem {
    line: Shape,
}

impl NoteStem {
    pub fn new(size: f64, color: Rgba8) -> Self {
        Self {
            line: Shape::segment(
                Point::ORIGIN,
                Point::new(0.0, -STEM_LENGTH * size),
                STEM_STROKE,
                color,
            ),
        }
    }

    pub fn line(&self) -> &Shape {
        &self.line
    }

    pub fn to_node(&self) -> Node {
        Node::Shape(self.line.clone())
    }
}

impl Placement for NoteStem {
    fn bounds(&self) -> Rect {
        self.line.bounds()
    }

    fn apply_affine(&mut self, affine: Affine) {
        self.line.apply_affine(affine);
    }
}

impl Recolor for NoteStem {
    fn recolor(&mut self, color: Rgba8) {
        self.line.recolor(color);
    }
}
