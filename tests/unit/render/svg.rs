use super::*;
use crate::{
    foundation::core::{BezPath, Point},
    scene::node::Group,
};

fn square() -> Shape {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((1.0, 0.0));
    path.line_to((1.0, 1.0));
    path.close_path();
    Shape::filled(path, Rgba8::WHITE)
}

#[test]
fn defaults_match_white_on_black() {
    let opts = SvgOptions::default();
    assert_eq!(opts.scale, 100.0);
    assert_eq!(opts.margin, 0.25);
    assert_eq!(opts.background, Some(Rgba8::BLACK));
    opts.validate().unwrap();
}

#[test]
fn rejects_bad_options() {
    for opts in [
        SvgOptions {
            scale: 0.0,
            ..Default::default()
        },
        SvgOptions {
            scale: f64::NAN,
            ..Default::default()
        },
        SvgOptions {
            margin: -1.0,
            ..Default::default()
        },
    ] {
        let err = render_svg(&Node::from(square()), &opts).unwrap_err();
        assert!(matches!(err, StaveError::Validation(_)), "{err}");
    }
}

#[test]
fn canvas_covers_bounds_plus_margin() {
    let svg = render_svg(&Node::from(square()), &SvgOptions::default()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="150" height="150""#), "{svg}");
    assert!(svg.contains(r##"fill="#000000""##));
    assert!(svg.contains(r#"fill-rule="nonzero""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn strokes_scale_with_the_canvas() {
    let line = Shape::segment(Point::new(0.0, 0.0), Point::new(2.0, 0.0), 0.04, Rgba8::WHITE);
    let opts = SvgOptions {
        scale: 50.0,
        margin: 0.0,
        background: None,
    };
    let svg = render_svg(&Node::from(line), &opts).unwrap();
    assert!(svg.contains(r#"stroke-width="2.000""#), "{svg}");
    assert!(svg.contains(r#"fill="none""#));
    assert!(!svg.contains("<rect"));
}

#[test]
fn labels_become_escaped_text() {
    let label = Label::new("a<b", 0.5, Rgba8::opaque(255, 0, 0));
    let svg = render_svg(&Node::from(label), &SvgOptions::default()).unwrap();
    assert!(svg.contains("a&lt;b</text>"), "{svg}");
    assert!(svg.contains(r##"fill="#ff0000""##));
    assert!(svg.contains(r#"text-anchor="middle""#));
}

#[test]
fn translucent_colors_carry_opacity() {
    let mut shape = square();
    shape.color = Rgba8 {
        r: 0,
        g: 0,
        b: 255,
        a: 128,
    };
    let svg = render_svg(&Node::from(shape), &SvgOptions::default()).unwrap();
    assert!(svg.contains(r#"fill-opacity="0.502""#), "{svg}");
}

#[test]
fn empty_node_renders_margin_only() {
    let svg = render_svg(&Group::new().into(), &SvgOptions::default()).unwrap();
    assert!(svg.contains(r#"width="50" height="50""#), "{svg}");
}
