use super::*;

#[test]
fn numerals_stack_without_gap() {
    let sig = Signature::new(0.5, TimeSignature::new(3, 4).unwrap(), Rgba8::WHITE);
    assert_eq!(sig.numerator().text, "3");
    assert_eq!(sig.denominator().text, "4");

    let top = sig.numerator().bounds();
    let bottom = sig.denominator().bounds();
    assert!((top.height() - 0.5).abs() < 1e-12);
    assert!((bottom.height() - 0.5).abs() < 1e-12);
    assert!((top.y1 - bottom.y0).abs() < 1e-12);
    assert!(top.y0 < bottom.y0);
    assert!((sig.height() - 1.0).abs() < 1e-12);
}

#[test]
fn wide_numerals_stay_centered() {
    let sig = Signature::new(0.5, TimeSignature::new(12, 8).unwrap(), Rgba8::WHITE);
    let top = sig.numerator().bounds();
    let bottom = sig.denominator().bounds();
    assert!(top.width() > bottom.width());
    assert!((top.center().x - bottom.center().x).abs() < 1e-12);
}

#[test]
fn recolor_and_flatten() {
    let green = Rgba8::opaque(0, 255, 0);
    let mut sig = Signature::new(1.0, TimeSignature::default(), Rgba8::WHITE);
    sig.recolor(green);
    assert_eq!(sig.numerator().color, green);
    assert_eq!(sig.denominator().color, green);
    assert_eq!(sig.to_node().leaf_count(), 2);
}
