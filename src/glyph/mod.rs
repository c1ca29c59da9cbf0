//! Notation glyphs built from scene primitives.
//!
//! Every glyph is constructed at a `size` (the staff's line spacing), exposes
//! [`Placement`](crate::scene::place::Placement) and
//! [`Recolor`](crate::scene::node::Recolor), and flattens into a scene
//! [`Node`](crate::scene::node::Node).
//!
//! Sizes are not validated: a zero or negative size yields degenerate geometry.

pub mod note;
pub mod notehead;
pub mod signature;
pub mod stem;

use crate::{foundation::core::Rgba8, glyph::note::Note};

/// Stroke width of staff lines and thin bar lines.
pub const THIN_STROKE: f64 = 0.0125;
/// Stroke width of the closing bar line.
pub const THICK_STROKE: f64 = 0.03;
/// Stroke width of note stems.
pub const STEM_STROKE: f64 = 0.04;

/// Glyphs the duration catalog can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphKind {
    Whole,
    Half,
    Quarter,
}

impl GlyphKind {
    pub fn has_open_head(self) -> bool {
        matches!(self, Self::Whole | Self::Half)
    }

    pub fn has_stem(self) -> bool {
        matches!(self, Self::Half | Self::Quarter)
    }

    /// Build this glyph at `size`.
    pub fn build(self, size: f64, color: Rgba8) -> Note {
        Note::new(size, self.has_open_head(), self.has_stem(), color)
    }
}
