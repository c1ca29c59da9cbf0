use std::fmt::Write as _;

use crate::{
    foundation::{
        core::{Affine, Rect, Rgba8},
        error::{StaveError, StaveResult},
    },
    scene::{
        node::{FillRule, Label, Node, Paint, Shape},
        place::Placement,
    },
};

/// Font size of a label relative to its box height; digits are about 0.7em tall.
const LABEL_EM: f64 = 1.0 / 0.7;

/// Largest accepted output side in pixels.
const MAX_DIM_PX: f64 = 16_384.0;

/// How world units map onto the SVG canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SvgOptions {
    /// Pixels per world unit.
    pub scale: f64,
    /// Empty border around the content, in world units.
    pub margin: f64,
    /// Canvas fill; `None` leaves the canvas transparent.
    pub background: Option<Rgba8>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            scale: 100.0,
            margin: 0.25,
            background: Some(Rgba8::BLACK),
        }
    }
}

impl SvgOptions {
    pub fn validate(&self) -> StaveResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(StaveError::validation("render scale must be finite and > 0"));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(StaveError::validation("render margin must be finite and >= 0"));
        }
        Ok(())
    }
}

struct SvgBuilder {
    elements: Vec<String>,
    width: u32,
    height: u32,
}

impl SvgBuilder {
    fn new(width: u32, height: u32) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn background(&mut self, color: Rgba8) {
        self.elements.push(format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"{}/>"#,
            self.width,
            self.height,
            color.to_hex_rgb(),
            opacity_attr("fill-opacity", color)
        ));
    }

    fn shape(&mut self, shape: &Shape, to_px: Affine, scale: f64) {
        let mut path = shape.path.clone();
        path.apply_affine(to_px);
        let d = path.to_svg();
        let color = shape.color.to_hex_rgb();
        let el = match shape.paint {
            Paint::Fill(rule) => format!(
                r#"<path d="{d}" fill="{color}" fill-rule="{}"{}/>"#,
                match rule {
                    FillRule::NonZero => "nonzero",
                    FillRule::EvenOdd => "evenodd",
                },
                opacity_attr("fill-opacity", shape.color)
            ),
            Paint::Stroke { width } => format!(
                r#"<path d="{d}" fill="none" stroke="{color}" stroke-width="{:.3}"{}/>"#,
                width * scale,
                opacity_attr("stroke-opacity", shape.color)
            ),
        };
        self.elements.push(el);
    }

    fn text(&mut self, label: &Label, to_px: Affine) {
        let rect = to_px.transform_rect_bbox(label.rect);
        let escaped = label
            .text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        self.elements.push(format!(
            r#"<text x="{:.3}" y="{:.3}" font-family="serif" font-size="{:.3}" font-weight="bold" fill="{}" text-anchor="middle"{}>{}</text>"#,
            rect.center().x,
            rect.y1,
            rect.height() * LABEL_EM,
            label.color.to_hex_rgb(),
            opacity_attr("fill-opacity", label.color),
            escaped
        ));
    }
}

fn opacity_attr(name: &str, color: Rgba8) -> String {
    let mut out = String::new();
    if color.a < 255 {
        let _ = write!(out, r#" {name}="{:.3}""#, color.opacity());
    }
    out
}

/// Render `node` as a standalone SVG document.
///
/// The canvas covers the node's bounds plus `opts.margin` on every side;
/// world units are scaled by `opts.scale` into pixels. An empty node yields a
/// canvas of margin only.
#[tracing::instrument(skip(node))]
pub fn render_svg(node: &Node, opts: &SvgOptions) -> StaveResult<String> {
    opts.validate()?;

    let content = if node.is_empty() {
        Rect::ZERO
    } else {
        node.bounds()
    };
    let frame = content.inflate(opts.margin, opts.margin);
    let width = (frame.width() * opts.scale).ceil().max(1.0);
    let height = (frame.height() * opts.scale).ceil().max(1.0);
    if width > MAX_DIM_PX || height > MAX_DIM_PX {
        return Err(StaveError::validation(format!(
            "svg canvas too large: {width}x{height} (max {MAX_DIM_PX}x{MAX_DIM_PX})"
        )));
    }

    let to_px = Affine::scale(opts.scale) * Affine::translate((-frame.x0, -frame.y0));
    let mut svg = SvgBuilder::new(width as u32, height as u32);
    if let Some(bg) = opts.background {
        svg.background(bg);
    }
    node.for_each_leaf(&mut |leaf| match leaf {
        Node::Shape(shape) => svg.shape(shape, to_px, opts.scale),
        Node::Label(label) => svg.text(label, to_px),
        Node::Group(_) => {}
    });
    tracing::debug!(
        width = svg.width,
        height = svg.height,
        elements = svg.elements.len(),
        "svg rendered"
    );
    Ok(svg.build())
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
