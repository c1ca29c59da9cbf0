use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StaveError::invalid_note("x")
            .to_string()
            .contains("invalid note:")
    );
    assert!(
        StaveError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StaveError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn fill_errors_report_beats() {
    let err = StaveError::TooManyBeats {
        requested: Beats::quarters(5),
        capacity: Beats::quarters(4),
    };
    assert_eq!(
        err.to_string(),
        "too many beats: 5 requested, measure holds 4"
    );
    assert!(err.is_fill_error());

    let err = StaveError::NotEnoughBeats {
        provided: Beats::new(3, 2).unwrap(),
        capacity: Beats::quarters(3),
    };
    assert_eq!(
        err.to_string(),
        "not enough beats: 3/2 provided, measure holds 3"
    );
    assert!(err.is_fill_error());
    assert!(!StaveError::invalid_note("x").is_fill_error());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StaveError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
