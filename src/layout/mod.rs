//! Measure layout: fill validation, note spacing, glyph placement.
//!
//! [`fill`] and [`spacing`] are pure functions over durations; [`measure`]
//! combines them with the staff and the glyph factory.

pub mod fill;
pub mod measure;
pub mod spacing;
