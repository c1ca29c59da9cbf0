//! Output backends: SVG text and PNG rasters.
//!
//! [`svg::render_svg`] turns any scene [`Node`](crate::scene::node::Node)
//! into a standalone SVG document; [`raster`] rasterizes that document with
//! resvg and writes PNG files.

pub mod raster;
pub mod svg;

pub use raster::{RasterImage, rasterize_svg, write_png};
pub use svg::{SvgOptions, render_svg};
