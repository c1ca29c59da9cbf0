use crate::{
    foundation::core::{Affine, Rect, Rgba8},
    notation::time_signature::TimeSignature,
    scene::{
        node::{Group, Label, Node, Recolor},
        place::{Dir, Placement, arrange},
    },
};

/// Stacked time-signature numerals, numerator over denominator.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    numerals: [Label; 2],
}

impl Signature {
    /// Each numeral is `size` tall; the two touch with no gap.
    pub fn new(size: f64, time_signature: TimeSignature, color: Rgba8) -> Self {
        let mut numerals = [
            Label::new(time_signature.numerator.to_string(), size, color),
            Label::new(time_signature.denominator.to_string(), size, color),
        ];
        arrange(&mut numerals, Dir::DOWN, 0.0);
        Self { numerals }
    }

    pub fn numerator(&self) -> &Label {
        &self.numerals[0]
    }

    pub fn denominator(&self) -> &Label {
        &self.numerals[1]
    }

    pub fn to_node(&self) -> Node {
        Group::named("signature")
            .with(self.numerals[0].clone())
            .with(self.numerals[1].clone())
            .into()
    }
}

impl Placement for Signature {
    fn bounds(&self) -> Rect {
        self.numerals[0].bounds().union(self.numerals[1].bounds())
    }

    fn apply_affine(&mut self, affine: Affine) {
        for numeral in &mut self.numerals {
            numeral.apply_affine(affine);
        }
    }
}

impl Recolor for Signature {
    fn recolor(&mut self, color: Rgba8) {
        for numeral in &mut self.numerals {
            numeral.recolor(color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/signature.rs"]
mod tests;
