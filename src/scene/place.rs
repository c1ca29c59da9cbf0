//! Relative positioning: edges, "next to", stacking, fit-to-height.
//!
//! All geometry is y-down, so [`Dir::UP`] points toward negative y.

use crate::foundation::core::{Affine, Point, Rect, Vec2};

/// Gap used when placing one object next to another without an explicit buffer.
pub const DEFAULT_BUFF: f64 = 0.25;

/// Unit direction on the grid of edges and corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dir {
    pub x: i8,
    pub y: i8,
}

impl Dir {
    pub const UP: Self = Self { x: 0, y: -1 };
    pub const DOWN: Self = Self { x: 0, y: 1 };
    pub const LEFT: Self = Self { x: -1, y: 0 };
    pub const RIGHT: Self = Self { x: 1, y: 0 };
    pub const UR: Self = Self { x: 1, y: -1 };
    pub const UL: Self = Self { x: -1, y: -1 };
    pub const DR: Self = Self { x: 1, y: 1 };
    pub const DL: Self = Self { x: -1, y: 1 };

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }

    /// `self` scaled to length `amount` along each non-zero axis.
    pub fn times(self, amount: f64) -> Vec2 {
        self.to_vec2() * amount
    }
}

/// Anything with a bounding box that can be moved by an affine map.
///
/// Stroke widths do not contribute to bounds; only path geometry does.
pub trait Placement {
    fn bounds(&self) -> Rect;

    fn apply_affine(&mut self, affine: Affine);

    fn width(&self) -> f64 {
        self.bounds().width()
    }

    fn height(&self) -> f64 {
        self.bounds().height()
    }

    fn center(&self) -> Point {
        self.bounds().center()
    }

    fn shift(&mut self, by: Vec2) -> &mut Self {
        self.apply_affine(Affine::translate(by));
        self
    }

    fn move_to(&mut self, center: Point) -> &mut Self {
        let by = center - self.center();
        self.shift(by)
    }

    fn scale_about_center(&mut self, factor: f64) -> &mut Self {
        let c = self.center().to_vec2();
        self.apply_affine(Affine::translate(c) * Affine::scale(factor) * Affine::translate(-c));
        self
    }

    /// Uniformly scale so the height equals `height`. Zero-height content is left as is.
    fn scale_to_height(&mut self, height: f64) -> &mut Self {
        let current = self.height();
        if current > 0.0 {
            self.scale_about_center(height / current);
        }
        self
    }

    /// Rotate by `radians` (clockwise on screen) about the bounds center.
    fn rotate_about_center(&mut self, radians: f64) -> &mut Self {
        let c = self.center().to_vec2();
        self.apply_affine(Affine::translate(c) * Affine::rotate(radians) * Affine::translate(-c));
        self
    }

    /// Move so the edge(s) named by `dir` line up with the same edge(s) of `target`.
    fn align_to(&mut self, target: Rect, dir: Dir) -> &mut Self {
        let b = self.bounds();
        let dx = match dir.x.signum() {
            1 => target.x1 - b.x1,
            -1 => target.x0 - b.x0,
            _ => 0.0,
        };
        let dy = match dir.y.signum() {
            1 => target.y1 - b.y1,
            -1 => target.y0 - b.y0,
            _ => 0.0,
        };
        self.shift(Vec2::new(dx, dy))
    }

    /// Place beside `target` on side `dir` with `buff` between the facing edges.
    ///
    /// On an axis `dir` does not name, centers are aligned.
    fn next_to(&mut self, target: Rect, dir: Dir, buff: f64) -> &mut Self {
        let b = self.bounds();
        let dx = match dir.x.signum() {
            1 => target.x1 + buff - b.x0,
            -1 => target.x0 - buff - b.x1,
            _ => target.center().x - b.center().x,
        };
        let dy = match dir.y.signum() {
            1 => target.y1 + buff - b.y0,
            -1 => target.y0 - buff - b.y1,
            _ => target.center().y - b.center().y,
        };
        self.shift(Vec2::new(dx, dy))
    }
}

/// Stack `items` one after another along `dir` with `gap` between them,
/// keeping the stack centered where the items were centered before.
pub fn arrange<T: Placement>(items: &mut [T], dir: Dir, gap: f64) {
    let Some(before) = union_bounds(items.iter().map(Placement::bounds)) else {
        return;
    };
    for i in 1..items.len() {
        let prev = items[i - 1].bounds();
        items[i].next_to(prev, dir, gap);
    }
    if let Some(after) = union_bounds(items.iter().map(Placement::bounds)) {
        let by = before.center() - after.center();
        for item in items.iter_mut() {
            item.shift(by);
        }
    }
}

pub(crate) fn union_bounds(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    rects.into_iter().reduce(|a, b| a.union(b))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/place.rs"]
mod tests;
