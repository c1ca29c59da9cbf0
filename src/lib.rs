//! Stave lays out a single measure of staff notation and draws it as vector graphics.
//!
//! Give it a [`TimeSignature`] and a list of notes; it checks that the notes
//! fill the measure exactly, spaces them along a five-line staff, and returns
//! a [`Measure`] that can be moved, recolored, flattened into a scene
//! [`Node`], or rendered to SVG and PNG.
//!
//! See [`guide`] for a walkthrough.
#![forbid(unsafe_code)]

pub mod dsl;
pub mod foundation;
pub mod glyph;
pub mod guide;
pub mod layout;
pub mod model;
pub mod notation;
pub mod render;
pub mod report;
pub mod scene;
pub mod staff;

pub use dsl::MeasureBuilder;
pub use foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{StaveError, StaveResult};
pub use glyph::{GlyphKind, note::Note, notehead::NoteHead, signature::Signature, stem::NoteStem};
pub use layout::{
    fill::{Fill, check_fill},
    measure::{Measure, PlacedNote},
};
pub use model::MeasureDocument;
pub use notation::{
    duration::{Beats, NoteEntry, NoteKind},
    time_signature::TimeSignature,
};
pub use render::{RasterImage, SvgOptions, rasterize_svg, render_svg, write_png};
pub use report::LayoutReport;
pub use scene::{
    node::{Group, Label, Node, Recolor, Shape},
    place::{Dir, Placement},
};
pub use staff::builder::{Staff, StaffLayout};
