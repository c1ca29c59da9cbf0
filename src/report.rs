//! Machine-readable summary of a laid-out measure.

use crate::{
    foundation::{
        core::Rect,
        error::{StaveError, StaveResult},
    },
    glyph::GlyphKind,
    layout::{fill::Fill, measure::Measure},
    notation::time_signature::TimeSignature,
    scene::place::Placement,
};

/// Axis-aligned box in world units, y-down.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BoundsReport {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl From<Rect> for BoundsReport {
    fn from(r: Rect) -> Self {
        Self {
            x0: r.x0,
            y0: r.y0,
            x1: r.x1,
            y1: r.y1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NoteReport {
    pub kind: GlyphKind,
    /// Duration in quarter notes, as an exact ratio such as `"1/2"`.
    pub duration: String,
    pub k: f64,
    pub gap: Option<f64>,
    pub bounds: BoundsReport,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayoutReport {
    pub time_signature: TimeSignature,
    pub measure_length: String,
    pub fill: Fill,
    pub note_size: f64,
    pub note_buff: f64,
    pub staff_width: f64,
    pub bounds: BoundsReport,
    pub notes: Vec<NoteReport>,
}

impl LayoutReport {
    pub fn from_measure(measure: &Measure) -> Self {
        let layout = measure.layout();
        let time_signature = measure.time_signature();
        Self {
            time_signature,
            measure_length: measure.measure_length().to_string(),
            fill: measure.fill(),
            note_size: layout.note_size,
            note_buff: layout.note_buff,
            staff_width: layout.width,
            bounds: measure.bounds().into(),
            notes: measure
                .notes()
                .iter()
                .map(|n| NoteReport {
                    kind: n.entry().glyph,
                    duration: n.entry().duration.to_string(),
                    k: n.k(),
                    gap: n.gap(),
                    bounds: n.glyph().bounds().into(),
                })
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> StaveResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StaveError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../tests/unit/report.rs"]
mod tests;
