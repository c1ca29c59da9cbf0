use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::{
        core::Rgba8,
        error::{StaveError, StaveResult},
    },
    layout::measure::Measure,
    notation::{
        duration::{NoteEntry, NoteKind},
        time_signature::TimeSignature,
    },
    render::svg::SvgOptions,
};

/// A measure described as data: what to lay out and how to draw it.
///
/// ```json
/// { "time_signature": [3, 4], "notes": ["half", "quarter"], "color": "#ffcc00" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeasureDocument {
    #[serde(default)]
    pub time_signature: TimeSignature,
    #[serde(default)]
    pub notes: Vec<NoteKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
    #[serde(default)]
    pub render: SvgOptions,
}

impl MeasureDocument {
    pub fn from_json_str(s: &str) -> StaveResult<Self> {
        serde_json::from_str(s).map_err(|e| StaveError::serde(e.to_string()))
    }

    pub fn from_path(path: &Path) -> StaveResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("open measure document '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> StaveResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StaveError::serde(e.to_string()))
    }

    pub fn entries(&self) -> Vec<NoteEntry> {
        self.notes.iter().map(|k| k.entry()).collect()
    }

    pub fn validate(&self) -> StaveResult<()> {
        self.render.validate()
    }

    /// Lay out the measure this document describes.
    pub fn build(&self) -> StaveResult<Measure> {
        self.validate()?;
        Measure::with_color(
            &self.entries(),
            self.time_signature,
            self.color.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/model.rs"]
mod tests;
