use super::*;
use crate::scene::node::Paint;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn ts(n: u32, d: u32) -> TimeSignature {
    TimeSignature::new(n, d).unwrap()
}

#[test]
fn layout_formulas() {
    let common = StaffLayout::for_signature(ts(4, 4));
    assert!(approx(common.width, 4.0));
    assert!(approx(common.note_buff, 0.6));
    assert!(approx(common.note_size, 0.25));

    let waltz = StaffLayout::for_signature(ts(3, 4));
    assert!(approx(waltz.width, 3.0));
    assert!(approx(waltz.note_buff, 0.5));

    // Narrow signatures still get two beats of width.
    let march = StaffLayout::for_signature(ts(2, 4));
    assert!(approx(march.width, 2.0));
    assert!(approx(march.note_buff, 1.0 / 3.0));

    let compound = StaffLayout::for_signature(ts(6, 8));
    assert!(approx(compound.width, 3.0));
    assert!(approx(compound.note_buff, 0.5));
}

#[test]
fn layout_derivation_is_idempotent() {
    for sig in [ts(4, 4), ts(3, 4), ts(5, 8), ts(7, 3)] {
        assert_eq!(StaffLayout::for_signature(sig), StaffLayout::for_signature(sig));
        assert_eq!(Staff::new(sig, Rgba8::WHITE), Staff::new(sig, Rgba8::WHITE));
    }
}

#[test]
fn built_staff_agrees_with_derived_layout() {
    for sig in [ts(4, 4), ts(3, 4), ts(2, 2), ts(6, 8), ts(7, 3)] {
        let staff = Staff::new(sig, Rgba8::WHITE);
        let layout = staff.layout();
        assert_eq!(layout, StaffLayout::for_signature(sig), "{sig}");

        let lines = staff.lines();
        let spacing = lines[1].bounds().y0 - lines[0].bounds().y0;
        assert!(approx(spacing, layout.note_size), "{sig}");
        assert!(approx(lines[0].bounds().width(), layout.width), "{sig}");
    }
}

#[test]
fn five_lines_centered_on_origin() {
    let staff = Staff::default();
    let ys: Vec<f64> = staff.lines().iter().map(|l| l.bounds().y0).collect();
    let expected = [-0.5, -0.25, 0.0, 0.25, 0.5];
    for (y, e) in ys.iter().zip(expected) {
        assert!(approx(*y, e), "{ys:?}");
    }
    for line in staff.lines() {
        let b = line.bounds();
        assert!(approx(b.x0, -2.0) && approx(b.x1, 2.0));
        assert_eq!(line.paint, Paint::Stroke { width: THIN_STROKE });
    }
    assert!(approx(staff.line_bounds(3).unwrap().y0, 0.25));
    assert!(staff.line_bounds(5).is_none());
}

#[test]
fn bar_lines_span_the_staff() {
    let staff = Staff::default();
    let [left, inner, closing] = staff.bar_lines();
    for bar in [left, inner, closing] {
        let b = bar.bounds();
        assert!(approx(b.y0, -0.5) && approx(b.y1, 0.5));
        assert!(approx(b.width(), 0.0));
    }
    assert!(approx(left.bounds().x0, -2.0));
    assert!(approx(inner.bounds().x0, 2.0 - RIGHT_BAR_INSET));
    assert!(approx(closing.bounds().x0, 2.0));
    assert_eq!(left.stroke_width(), Some(THIN_STROKE));
    assert_eq!(inner.stroke_width(), Some(THIN_STROKE));
    assert_eq!(closing.stroke_width(), Some(THICK_STROKE));
}

#[test]
fn signature_sits_against_left_bar_line() {
    let staff = Staff::new(ts(3, 4), Rgba8::WHITE);
    let sig = staff.signature().bounds();
    assert!(approx(sig.x0, staff.bar_lines()[0].bounds().x1));
    assert!(approx(sig.center().y, 0.0));
    assert!(approx(sig.height(), 4.0 * staff.layout().note_size));
    assert!(approx(staff.signature().numerator().height(), 0.5));
}

#[test]
fn transforms_and_recolor_reach_every_part() {
    let red = Rgba8::opaque(255, 0, 0);
    let mut staff = Staff::default();
    let before = staff.bounds();
    staff.shift(kurbo::Vec2::new(1.0, 2.0));
    let after = staff.bounds();
    assert!(approx(after.x0 - before.x0, 1.0));
    assert!(approx(after.y0 - before.y0, 2.0));
    assert!(approx(staff.signature().center().y, 2.0));
    assert!(approx(staff.layout().note_size, 0.25));

    staff.recolor(red);
    let node = staff.to_node();
    assert_eq!(node.leaf_count(), 5 + 3 + 2);
    node.for_each_leaf(&mut |leaf| match leaf {
        Node::Shape(s) => assert_eq!(s.color, red),
        Node::Label(l) => assert_eq!(l.color, red),
        Node::Group(_) => unreachable!(),
    });
}
