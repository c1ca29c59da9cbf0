use crate::{
    foundation::{
        core::{Affine, Rect, Rgba8},
        error::StaveResult,
    },
    glyph::note::Note,
    layout::{
        fill::{Fill, check_fill},
        spacing,
    },
    notation::{
        duration::{Beats, NoteEntry},
        time_signature::TimeSignature,
    },
    render::svg::{SvgOptions, render_svg},
    scene::{
        node::{Group, Node, Recolor},
        place::{DEFAULT_BUFF, Dir, Placement},
    },
    staff::builder::{Staff, StaffLayout},
};

/// Index of the staff line note bottoms are aligned to before centering.
const ANCHOR_LINE: usize = 3;

/// A note glyph with the spacing decisions that placed it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedNote {
    entry: NoteEntry,
    k: f64,
    gap: Option<f64>,
    glyph: Note,
}

impl PlacedNote {
    pub fn entry(&self) -> NoteEntry {
        self.entry
    }

    /// Spacing multiplier carried over from the previous note.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Gap to the previous note; `None` for the first note and the whole-measure note.
    pub fn gap(&self) -> Option<f64> {
        self.gap
    }

    pub fn glyph(&self) -> &Note {
        &self.glyph
    }
}

/// One measure: a staff and the notes laid out on it.
///
/// Construction validates the whole sequence before building any glyph, so
/// an error never leaves a half-placed measure behind.
#[derive(Clone, Debug, PartialEq)]
pub struct Measure {
    staff: Staff,
    notes: Vec<PlacedNote>,
    fill: Fill,
    capacity: Beats,
}

impl Measure {
    /// Lay out `entries` under `time_signature` in the default ink color.
    pub fn new(entries: &[NoteEntry], time_signature: TimeSignature) -> StaveResult<Self> {
        Self::with_color(entries, time_signature, Rgba8::default())
    }

    #[tracing::instrument(skip(entries, color), fields(notes = entries.len()))]
    pub fn with_color(
        entries: &[NoteEntry],
        time_signature: TimeSignature,
        color: Rgba8,
    ) -> StaveResult<Self> {
        let capacity = time_signature.measure_length()?;
        let durations: Vec<Beats> = entries.iter().map(|e| e.duration).collect();
        let fill = check_fill(&durations, capacity)?;
        tracing::debug!(?fill, %capacity, "measure fill");

        let staff = Staff::new(time_signature, color);
        let notes = match fill {
            Fill::Empty => Vec::new(),
            // Left where the factory puts it: head centered on the middle line.
            Fill::WholeMeasure => entries
                .iter()
                .take(1)
                .map(|&entry| PlacedNote {
                    entry,
                    k: 0.0,
                    gap: None,
                    glyph: entry.glyph.build(staff.layout().note_size, color),
                })
                .collect(),
            Fill::Exact => place_notes(&staff, entries, &durations, color),
        };

        Ok(Self {
            staff,
            notes,
            fill,
            capacity,
        })
    }

    pub fn staff(&self) -> &Staff {
        &self.staff
    }

    pub fn layout(&self) -> StaffLayout {
        self.staff.layout()
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.staff.time_signature()
    }

    /// Capacity in quarter notes the notes were checked against.
    pub fn measure_length(&self) -> Beats {
        self.capacity
    }

    pub fn notes(&self) -> &[PlacedNote] {
        &self.notes
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }

    /// Recolor the notes and leave the staff as is.
    pub fn recolor_notes(&mut self, color: Rgba8) {
        for note in &mut self.notes {
            note.glyph.recolor(color);
        }
    }

    pub fn to_node(&self) -> Node {
        let notes = self
            .notes
            .iter()
            .map(|n| n.glyph.to_node())
            .fold(Group::named("notes"), Group::with);
        Group::named("measure")
            .with(self.staff.to_node())
            .with(notes)
            .into()
    }

    pub fn to_svg(&self, opts: &SvgOptions) -> StaveResult<String> {
        render_svg(&self.to_node(), opts)
    }
}

fn place_notes(
    staff: &Staff,
    entries: &[NoteEntry],
    durations: &[Beats],
    color: Rgba8,
) -> Vec<PlacedNote> {
    let layout = staff.layout();
    let anchor = staff.line_bounds(ANCHOR_LINE).unwrap_or(Rect::ZERO);
    let ks = spacing::multipliers(durations);

    let mut placed: Vec<PlacedNote> = Vec::with_capacity(entries.len());
    for (&entry, k) in entries.iter().zip(ks) {
        let mut glyph = entry.glyph.build(layout.note_size, color);
        let gap = match placed.last() {
            None => {
                glyph.next_to(staff.signature().numerator().bounds(), Dir::RIGHT, DEFAULT_BUFF);
                None
            }
            Some(prev) => {
                let gap = spacing::gap(layout.note_buff, glyph.width(), k);
                glyph.next_to(prev.glyph.bounds(), Dir::RIGHT, gap);
                Some(gap)
            }
        };
        glyph
            .align_to(anchor, Dir::DOWN)
            .shift(Dir::UP.times(layout.note_size / 2.0));
        placed.push(PlacedNote {
            entry,
            k,
            gap,
            glyph,
        });
    }
    placed
}

impl Placement for Measure {
    fn bounds(&self) -> Rect {
        self.notes
            .iter()
            .map(|n| n.glyph.bounds())
            .fold(self.staff.bounds(), |acc, r| acc.union(r))
    }

    fn apply_affine(&mut self, affine: Affine) {
        self.staff.apply_affine(affine);
        for note in &mut self.notes {
            note.glyph.apply_affine(affine);
        }
    }
}

impl Recolor for Measure {
    fn recolor(&mut self, color: Rgba8) {
        self.staff.recolor(color);
        self.recolor_notes(color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
