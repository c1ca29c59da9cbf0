//! # Stave guide
//!
//! A walkthrough of how a measure goes from a list of note names to pixels.
//!
//! ## Core concepts
//!
//! - [`TimeSignature`](crate::TimeSignature): beats per measure over the beat unit; its
//!   [`measure_length`](crate::TimeSignature::measure_length) is counted in quarter notes
//! - [`NoteKind`](crate::NoteKind) and [`NoteEntry`](crate::NoteEntry): the duration catalog
//!   (whole = 4, half = 2, quarter = 1) and the glyph each kind draws
//! - [`Staff`](crate::Staff): five lines, three bar lines and the signature, plus the
//!   [`StaffLayout`](crate::StaffLayout) spacing constants every note shares
//! - [`Measure`](crate::Measure): the staff with its notes placed
//! - [`Node`](crate::Node): the flattened scene tree renderers consume
//!
//! ## Pipeline
//!
//! 1. Validate the fill: [`check_fill`](crate::check_fill) folds the durations against the
//!    measure length. Nothing is built if it fails.
//! 2. Build the staff and derive `note_size` (line spacing) and `note_buff` (base gap).
//! 3. Place notes left to right. The first sits just right of the signature; each later note
//!    sits `note_buff + (note_buff + width) * k` after the previous one, where `k` is the
//!    previous note's duration minus one. Every head is centered on the middle line.
//! 4. Flatten with [`Measure::to_node`](crate::Measure::to_node) and render with
//!    [`render_svg`](crate::render_svg), then optionally
//!    [`rasterize_svg`](crate::rasterize_svg) and [`write_png`](crate::write_png).
//!
//! A single note that lasts the whole measure is a special case: it is not spaced against the
//! signature and stays centered on the staff.
//!
//! ## Example
//!
//! ```
//! use stave::{MeasureBuilder, NoteKind, SvgOptions, TimeSignature};
//!
//! let measure = MeasureBuilder::new(TimeSignature::COMMON)
//!     .note(NoteKind::Quarter)
//!     .note(NoteKind::Half)
//!     .note(NoteKind::Quarter)
//!     .build()?;
//! assert_eq!(measure.notes().len(), 3);
//!
//! let svg = measure.to_svg(&SvgOptions::default())?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), stave::StaveError>(())
//! ```
//!
//! ## Errors
//!
//! - [`StaveError::TooManyBeats`](crate::StaveError::TooManyBeats): the running total passed the
//!   measure length, or a whole-measure note was followed by more notes
//! - [`StaveError::NotEnoughBeats`](crate::StaveError::NotEnoughBeats): the notes ran out early
//! - [`StaveError::InvalidNote`](crate::StaveError::InvalidNote): unknown note name or a
//!   non-positive duration
//!
//! An empty note list is legal and draws the staff alone.
//!
//! ## Coordinates
//!
//! World units are y-down with the staff centered on the origin. With the default layout the
//! staff lines sit at `y = -0.5, -0.25, 0, 0.25, 0.5` and a 4/4 staff spans `x = -2..2`.
//! [`SvgOptions::scale`](crate::SvgOptions::scale) maps world units to pixels.
