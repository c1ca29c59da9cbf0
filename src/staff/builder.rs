use crate::{
    foundation::core::{Affine, Point, Rect, Rgba8},
    glyph::{THICK_STROKE, THIN_STROKE, signature::Signature},
    notation::time_signature::TimeSignature,
    scene::{
        node::{Group, Node, Recolor, Shape},
        place::{DEFAULT_BUFF, Dir, Placement, arrange},
    },
};

/// Number of horizontal staff lines.
pub const LINE_COUNT: usize = 5;

/// Inset of the inner right bar line from the closing thick one.
pub const RIGHT_BAR_INSET: f64 = 0.125;

/// Spacing constants shared by every note on one staff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaffLayout {
    /// Vertical distance between adjacent staff lines; also the notehead height.
    pub note_size: f64,
    /// Base horizontal gap between consecutive notes.
    pub note_buff: f64,
    /// Horizontal length of the staff lines.
    pub width: f64,
}

impl StaffLayout {
    /// Derive the layout for `time_signature`. Pure: same input, same output.
    pub fn for_signature(time_signature: TimeSignature) -> Self {
        let numerator = f64::from(time_signature.numerator);
        let beat_factor = time_signature.beat_factor();
        let width = numerator.max(2.0) / beat_factor;
        Self {
            note_size: DEFAULT_BUFF,
            note_buff: (width - 1.0) / (numerator / beat_factor + 1.0),
            width,
        }
    }
}

/// The drawn staff of one measure.
///
/// Layout values describe the staff as built; later transforms move the
/// geometry but leave [`Staff::layout`] untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Staff {
    time_signature: TimeSignature,
    layout: StaffLayout,
    lines: [Shape; LINE_COUNT],
    bar_lines: [Shape; 3],
    signature: Signature,
}

impl Staff {
    #[tracing::instrument(skip(color))]
    pub fn new(time_signature: TimeSignature, color: Rgba8) -> Self {
        let layout = StaffLayout::for_signature(time_signature);
        let half = layout.width / 2.0;

        let mut lines: [Shape; LINE_COUNT] = std::array::from_fn(|_| {
            Shape::segment(
                Point::new(-half, 0.0),
                Point::new(half, 0.0),
                THIN_STROKE,
                color,
            )
        });
        arrange(&mut lines, Dir::DOWN, layout.note_size);

        let top = lines[0].bounds();
        let bottom = lines[LINE_COUNT - 1].bounds();
        let left = Shape::segment(
            Point::new(top.x0, top.y0),
            Point::new(bottom.x0, bottom.y0),
            THIN_STROKE,
            color,
        );
        let mut inner_right = Shape::segment(
            Point::new(top.x1, top.y0),
            Point::new(bottom.x1, bottom.y0),
            THIN_STROKE,
            color,
        );
        inner_right.shift(Dir::LEFT.times(RIGHT_BAR_INSET));
        let closing = Shape::segment(
            Point::new(top.x1, top.y0),
            Point::new(bottom.x1, bottom.y0),
            THICK_STROKE,
            color,
        );

        let mut signature = Signature::new(2.0 * layout.note_size, time_signature, color);
        signature.next_to(left.bounds(), Dir::RIGHT, 0.0);

        tracing::debug!(
            note_size = layout.note_size,
            note_buff = layout.note_buff,
            width = layout.width,
            "staff layout"
        );

        Self {
            time_signature,
            layout,
            lines,
            bar_lines: [left, inner_right, closing],
            signature,
        }
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    pub fn layout(&self) -> StaffLayout {
        self.layout
    }

    /// Staff lines, top to bottom.
    pub fn lines(&self) -> &[Shape; LINE_COUNT] {
        &self.lines
    }

    /// Left thin, right thin, right thick.
    pub fn bar_lines(&self) -> &[Shape; 3] {
        &self.bar_lines
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Bounds of staff line `index` (0 is the top line).
    pub fn line_bounds(&self, index: usize) -> Option<Rect> {
        self.lines.get(index).map(Placement::bounds)
    }

    pub fn to_node(&self) -> Node {
        let lines = self
            .lines
            .iter()
            .cloned()
            .fold(Group::named("lines"), Group::with);
        let bars = self
            .bar_lines
            .iter()
            .cloned()
            .fold(Group::named("bar_lines"), Group::with);
        Group::named("staff")
            .with(lines)
            .with(bars)
            .with(self.signature.to_node())
            .into()
    }

    fn parts_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.lines.iter_mut().chain(self.bar_lines.iter_mut())
    }
}

impl Default for Staff {
    fn default() -> Self {
        Self::new(TimeSignature::COMMON, Rgba8::default())
    }
}

impl Placement for Staff {
    fn bounds(&self) -> Rect {
        self.lines
            .iter()
            .chain(self.bar_lines.iter())
            .map(Placement::bounds)
            .fold(self.signature.bounds(), |acc, r| acc.union(r))
    }

    fn apply_affine(&mut self, affine: Affine) {
        for part in self.parts_mut() {
            part.apply_affine(affine);
        }
        self.signature.apply_affine(affine);
    }
}

impl Recolor for Staff {
    fn recolor(&mut self, color: Rgba8) {
        for part in self.parts_mut() {
            part.recolor(color);
        }
        self.signature.recolor(color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/staff/builder.rs"]
mod tests;
