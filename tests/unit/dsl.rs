use super::*;
use crate::{
    foundation::error::StaveError, glyph::GlyphKind, layout::fill::Fill,
    notation::duration::Beats,
};

#[test]
fn builder_collects_notes_in_order() {
    let measure = MeasureBuilder::new(TimeSignature::COMMON)
        .note(NoteKind::Quarter)
        .note(NoteKind::Half)
        .note(NoteKind::Quarter)
        .build()
        .unwrap();
    let kinds: Vec<GlyphKind> = measure.notes().iter().map(|n| n.entry().glyph).collect();
    assert_eq!(
        kinds,
        vec![GlyphKind::Quarter, GlyphKind::Half, GlyphKind::Quarter]
    );
}

#[test]
fn builder_validates_on_build() {
    let err = MeasureBuilder::new(TimeSignature::new(3, 4).unwrap())
        .notes([NoteKind::Quarter, NoteKind::Quarter])
        .build()
        .unwrap_err();
    assert!(matches!(err, StaveError::NotEnoughBeats { .. }));
}

#[test]
fn builder_colors_staff_and_notes_separately() {
    let red = Rgba8::opaque(255, 0, 0);
    let blue = Rgba8::opaque(0, 0, 255);
    let measure = MeasureBuilder::new(TimeSignature::COMMON)
        .note(NoteKind::Whole)
        .color(red)
        .note_color(blue)
        .build()
        .unwrap();
    assert_eq!(measure.fill(), Fill::WholeMeasure);
    assert_eq!(measure.staff().bar_lines()[2].color, red);
    assert_eq!(measure.notes()[0].glyph().head().color(), blue);
}

#[test]
fn builder_accepts_custom_entries() {
    let eighth = NoteEntry::custom(GlyphKind::Quarter, Beats::new(1, 2).unwrap());
    let measure = MeasureBuilder::new(TimeSignature::new(2, 4).unwrap())
        .entry(eighth)
        .entry(eighth)
        .note(NoteKind::Quarter)
        .build()
        .unwrap();
    assert_eq!(measure.notes().len(), 3);
}
