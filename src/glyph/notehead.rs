use kurbo::Ellipse;

use crate::{
    foundation::core::{Affine, BezPath, Point, Rect, Rgba8},
    scene::{
        node::{Node, PATH_TOLERANCE, Recolor, Shape},
        place::Placement,
    },
};

/// Width over height of the untilted head.
pub const HEAD_ASPECT: f64 = 1.618;
/// Height of the hole in an open head, relative to the head height.
pub const HOLE_HEIGHT: f64 = 0.618;
/// Tilt applied to every head, in degrees counter-clockwise on screen.
pub const HEAD_TILT_DEG: f64 = 21.0;

#[derive(Clone, Debug, PartialEq)]
enum HeadShape {
    Closed(Shape),
    /// `boundary` already has the hole cut out; `hole` is kept for geometry only.
    Open { boundary: Shape, hole: BezPath },
}

/// Oval notehead, filled or hollow.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteHead {
    shape: HeadShape,
}

impl NoteHead {
    pub fn new(size: f64, open: bool, color: Rgba8) -> Self {
        let outer = Ellipse::new(Point::ORIGIN, (HEAD_ASPECT / 2.0, 0.5), 0.0);
        let shape = if open {
            let hole = Ellipse::new(Point::ORIGIN, (HEAD_ASPECT / 2.0, HOLE_HEIGHT / 2.0), 0.0);
            HeadShape::Open {
                boundary: Shape::cutout(&outer, &hole, color),
                hole: kurbo::Shape::to_path(&hole, PATH_TOLERANCE),
            }
        } else {
            HeadShape::Closed(Shape::filled(
                kurbo::Shape::to_path(&outer, PATH_TOLERANCE),
                color,
            ))
        };
        let mut head = Self { shape };
        head.rotate_about_center(-HEAD_TILT_DEG.to_radians())
            .scale_to_height(size);
        head
    }

    pub fn is_open(&self) -> bool {
        matches!(self.shape, HeadShape::Open { .. })
    }

    /// The painted outline (for an open head, the ring with its hole cut out).
    pub fn outline(&self) -> &Shape {
        match &self.shape {
            HeadShape::Closed(s) => s,
            HeadShape::Open { boundary, .. } => boundary,
        }
    }

    /// Inner contour of an open head.
    pub fn hole(&self) -> Option<&BezPath> {
        match &self.shape {
            HeadShape::Closed(_) => None,
            HeadShape::Open { hole, .. } => Some(hole),
        }
    }

    pub fn color(&self) -> Rgba8 {
        self.outline().color
    }

    pub fn to_node(&self) -> Node {
        Node::Shape(self.outline().clone())
    }
}

impl Placement for NoteHead {
    fn bounds(&self) -> Rect {
        self.outline().bounds()
    }

    fn apply_affine(&mut self, affine: Affine) {
        match &mut self.shape {
            HeadShape::Closed(s) => s.apply_affine(affine),
            HeadShape::Open { boundary, hole } => {
                boundary.apply_affine(affine);
                hole.apply_affine(affine);
            }
        }
    }
}

impl Recolor for NoteHead {
    fn recolor(&mut self, color: Rgba8) {
        match &mut self.shape {
            HeadShape::Closed(s) => s.recolor(color),
            HeadShape::Open { boundary, .. } => boundary.recolor(color),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/notehead.rs"]
mod tests;
