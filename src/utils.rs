//! Utility functions

use std::path::PathBuf;

// Map pin with a magnifier cutout — used for the sidebar logo and window icon.
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><path fill="#34d399" d="M128 12c-48.6 0-88 39.4-88 88 0 30.9 17.6 62.5 36.2 87.6 18.4 24.8 37.2 42.9 45.1 50.1 3.8 3.5 9.6 3.5 13.4 0 7.9-7.2 26.7-25.3 45.1-50.1 18.6-25.1 36.2-56.7 36.2-87.6 0-48.6-39.4-88-88-88z"/><circle cx="116" cy="92" r="34" fill="none" stroke="#09090b" stroke-width="14"/><path d="m140 116 28 28" stroke="#09090b" stroke-width="14" stroke-linecap="round"/></svg>"##;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), width, height)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (settings, logs).
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Maps Business Scraper")
}
