//! PNG preview of an exported SVG, rendered with resvg.

use std::path::Path;

use anyhow::{Context, Result, bail};
use resvg::usvg;
use tiny_skia::Pixmap;

pub const DEFAULT_PNG_SCALE: f32 = 4.0;

/// Largest pixmap edge we are willing to allocate.
const MAX_PNG_EDGE: f32 = 16384.0;

/// Rasterize SVG bytes onto a white background and save as PNG.
///
/// Returns the pixel size written.
pub fn render_png(svg: &[u8], png_path: &Path, scale: f32) -> Result<(u32, u32)> {
    if !(scale.is_finite() && scale > 0.0) {
        bail!("PNG scale must be a positive number, got {}", scale);
    }

    let tree = usvg::Tree::from_data(svg, &usvg::Options::default())
        .context("Failed to parse SVG for preview")?;

    let size = tree.size();
    let scale = fit_scale(size.width(), size.height(), scale);
    let pixmap_width = (size.width() * scale).ceil().min(MAX_PNG_EDGE) as u32;
    let pixmap_height = (size.height() * scale).ceil().min(MAX_PNG_EDGE) as u32;

    let mut pixmap = Pixmap::new(pixmap_width.max(1), pixmap_height.max(1))
        .context("Could not create pixmap")?;

    // Fill with white background
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .with_context(|| format!("Failed to write {}", png_path.display()))?;
    eprintln!("Wrote: {} ({}x{})", png_path.display(), pixmap.width(), pixmap.height());

    Ok((pixmap.width(), pixmap.height()))
}

/// Largest scale not above `requested` that keeps both edges within `MAX_PNG_EDGE`.
fn fit_scale(width: f32, height: f32, requested: f32) -> f32 {
    let longest = width.max(height);
    if longest * requested <= MAX_PNG_EDGE {
        return requested;
    }
    let fitted = MAX_PNG_EDGE / longest;
    tracing::warn!(requested, fitted, "preview too large, scaling down to fit");
    fitted
}
