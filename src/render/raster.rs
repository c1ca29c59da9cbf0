use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::foundation::error::{StaveError, StaveResult};

/// Straight-alpha RGBA8 pixels, row-major.
#[derive(Clone, Debug)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RasterImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4)?.try_into().ok()
    }
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.faces().count(), "loaded system fonts");
    Arc::new(db)
}

/// Rasterize an SVG document at its own pixel size.
///
/// Text is shaped against the system font database; labels whose font is
/// missing are skipped by the rasterizer rather than failing the render.
#[tracing::instrument(skip(svg))]
pub fn rasterize_svg(svg: &str) -> StaveResult<RasterImage> {
    let opts = usvg::Options {
        fontdb: system_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;

    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| StaveError::validation("failed to allocate svg pixmap"))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Ok(RasterImage {
        width: pixmap.width(),
        height: pixmap.height(),
        data,
    })
}

/// Write `image` as a PNG, creating parent directories as needed.
pub fn write_png(image: &RasterImage, path: &Path) -> StaveResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &image.data,
        image.width,
        image.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
