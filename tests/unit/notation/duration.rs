use super::*;

#[test]
fn catalog_matches_quarter_note_units() {
    assert_eq!(NoteKind::Whole.entry().duration, Beats::quarters(4));
    assert_eq!(NoteKind::Half.entry().duration, Beats::quarters(2));
    assert_eq!(NoteKind::Quarter.entry().duration, Beats::quarters(1));

    assert_eq!(NoteKind::Whole.entry().glyph, GlyphKind::Whole);
    assert_eq!(NoteKind::Half.entry().glyph, GlyphKind::Half);
    assert_eq!(NoteKind::Quarter.entry().glyph, GlyphKind::Quarter);
}

#[test]
fn entries_sum_exactly() {
    let entries: Vec<NoteEntry> = [NoteKind::Quarter, NoteKind::Half, NoteKind::Quarter]
        .into_iter()
        .map(NoteEntry::from)
        .collect();
    assert_eq!(NoteEntry::total(&entries).unwrap(), Beats::quarters(4));
    assert_eq!(NoteEntry::total(&[]).unwrap(), Beats::ZERO);

    let thirds = Beats::new(1, 3).unwrap();
    assert_eq!(
        Beats::checked_sum([thirds, thirds, thirds]),
        Some(Beats::quarters(1))
    );
}

#[test]
fn sums_past_the_ratio_range_are_reported() {
    let a = Beats::new(1, 46_349).unwrap();
    let b = Beats::new(1, 46_351).unwrap();
    assert_eq!(a.checked_add(b), None);
    assert_eq!(Beats::checked_sum([Beats::quarters(1), a, b]), None);
    assert_eq!(Beats::quarters(i32::MAX).checked_add(Beats::quarters(1)), None);

    let entries = [
        NoteEntry::custom(GlyphKind::Quarter, a),
        NoteEntry::custom(GlyphKind::Quarter, b),
    ];
    let err = NoteEntry::total(&entries).unwrap_err();
    assert!(matches!(err, StaveError::InvalidNote(_)));
}

#[test]
fn beats_reject_min_terms() {
    assert!(Beats::new(i32::MIN, -1).is_err());
    assert!(Beats::new(i32::MIN, 1).is_err());
    assert!(Beats::new(1, i32::MIN).is_err());
    assert_eq!(Beats::new(i32::MAX, -1).unwrap().as_f64(), -f64::from(i32::MAX));
}

#[test]
fn beats_reject_zero_denominator_and_report_sign() {
    assert!(Beats::new(1, 0).is_err());
    assert!(Beats::quarters(1).is_positive());
    assert!(!Beats::ZERO.is_positive());
    assert!(!Beats::new(-1, 2).unwrap().is_positive());
    assert!(Beats::new(1, -2).unwrap() < Beats::ZERO);
    assert_eq!(Beats::new(3, 2).unwrap().as_f64(), 1.5);
    assert_eq!(Beats::new(6, 4).unwrap().to_string(), "3/2");
}

#[test]
fn note_names_parse_case_insensitively() {
    assert_eq!("Quarter".parse::<NoteKind>().unwrap(), NoteKind::Quarter);
    assert_eq!("h".parse::<NoteKind>().unwrap(), NoteKind::Half);
    assert_eq!(" W ".parse::<NoteKind>().unwrap(), NoteKind::Whole);

    let err = "eighth".parse::<NoteKind>().unwrap_err();
    assert!(matches!(err, StaveError::InvalidNote(_)));
}

#[test]
fn note_lists_accept_commas_and_spaces() {
    assert_eq!(
        NoteKind::parse_list("q, h q").unwrap(),
        vec![NoteKind::Quarter, NoteKind::Half, NoteKind::Quarter]
    );
    assert!(NoteKind::parse_list("").unwrap().is_empty());
    assert!(NoteKind::parse_list("q,x").is_err());
}

#[test]
fn note_kinds_serialize_lowercase() {
    let json = serde_json::to_string(&NoteKind::ALL).unwrap();
    assert_eq!(json, r#"["whole","half","quarter"]"#);
}
