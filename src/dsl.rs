use crate::{
    foundation::{core::Rgba8, error::StaveResult},
    layout::measure::Measure,
    notation::{
        duration::{NoteEntry, NoteKind},
        time_signature::TimeSignature,
    },
};

/// Fluent construction of a [`Measure`]; validation happens in [`MeasureBuilder::build`].
pub struct MeasureBuilder {
    time_signature: TimeSignature,
    entries: Vec<NoteEntry>,
    color: Rgba8,
    note_color: Option<Rgba8>,
}

impl MeasureBuilder {
    pub fn new(time_signature: TimeSignature) -> Self {
        Self {
            time_signature,
            entries: Vec::new(),
            color: Rgba8::default(),
            note_color: None,
        }
    }

    pub fn note(mut self, kind: NoteKind) -> Self {
        self.entries.push(kind.entry());
        self
    }

    pub fn notes(mut self, kinds: impl IntoIterator<Item = NoteKind>) -> Self {
        self.entries.extend(kinds.into_iter().map(NoteKind::entry));
        self
    }

    /// Add an entry outside the fixed catalog, such as a custom duration.
    pub fn entry(mut self, entry: NoteEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Ink for the staff and, unless [`MeasureBuilder::note_color`] is set, the notes.
    pub fn color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    pub fn note_color(mut self, color: Rgba8) -> Self {
        self.note_color = Some(color);
        self
    }

    pub fn build(self) -> StaveResult<Measure> {
        let mut measure = Measure::with_color(&self.entries, self.time_signature, self.color)?;
        if let Some(c) = self.note_color {
            measure.recolor_notes(c);
        }
        Ok(measure)
    }
}

#[cfg(test)]
#[path = "../tests/unit/dsl.rs"]
mod tests;
