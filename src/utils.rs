//! Utility functions

use crate::constants::APP_NAME;
use crate::error::AssetError;
use std::path::PathBuf;

// Drop over river waves, wide viewBox - sidebar and homepage logo
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 240 160"><defs><linearGradient id="d" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="#7dd3fc"/><stop offset="1" stop-color="#0284c7"/></linearGradient></defs><path fill="url(#d)" stroke="#09090b" stroke-width="1" d="M120 8C120 8 76 62 76 92a44 44 0 0 0 88 0C164 62 120 8 120 8Z"/><path fill="#e0f2fe" fill-opacity="0.55" d="M102 84c0-14 10-30 16-40-2 14-6 28-6 40a10 10 0 0 1-10 0Z"/><path fill="none" stroke="#38bdf8" stroke-width="7" stroke-linecap="round" d="M12 138c18-14 36-14 54 0s36 14 54 0 36-14 54 0 36 14 54 0"/><path fill="none" stroke="#0ea5e9" stroke-width="7" stroke-linecap="round" d="M36 154c14-10 28-10 42 0s28 10 42 0 28-10 42 0 28 10 42 0"/></svg>"##;

// Square viewBox, no waves - window/taskbar icon
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 128 128"><defs><linearGradient id="d" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="#7dd3fc"/><stop offset="1" stop-color="#0284c7"/></linearGradient></defs><path fill="url(#d)" d="M64 4C64 4 18 60 18 84a46 46 0 0 0 92 0C110 60 64 4 64 4Z"/><path fill="none" stroke="#e0f2fe" stroke-width="6" stroke-linecap="round" d="M34 92c10-8 20-8 30 0s20 8 30 0"/></svg>"##;

/// Straight-alpha RGBA pixels plus dimensions
pub struct Raster {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> Result<Raster, AssetError> {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default())?;
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    render_tree(&tree, scale, width, height)
}

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> Result<Raster, AssetError> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default())?;
    let scale = size as f32 / tree.size().width();
    render_tree(&tree, scale, size, size)
}

fn render_tree(
    tree: &resvg::usvg::Tree,
    scale: f32,
    width: u32,
    height: u32,
) -> Result<Raster, AssetError> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or(AssetError::InvalidSize { width, height })?;
    resvg::render(
        tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(Raster {
        pixels: premul_to_straight(&pixmap),
        width,
        height,
    })
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

/// Per-user app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterize_logo_keeps_aspect() {
        let raster = rasterize_logo(120).expect("logo renders");
        assert_eq!(raster.width, 120);
        assert_eq!(raster.height, 80);
        assert_eq!(raster.pixels.len(), (120 * 80 * 4) as usize);
        assert!(raster.pixels.chunks(4).any(|p| p[3] > 0));
    }

    #[test]
    fn test_rasterize_icon_is_square() {
        let raster = rasterize_icon(32).expect("icon renders");
        assert_eq!((raster.width, raster.height), (32, 32));
        assert_eq!(raster.pixels.len(), 32 * 32 * 4);
    }

    #[test]
    fn test_rasterize_zero_width_fails() {
        assert!(matches!(
            rasterize_logo(0),
            Err(AssetError::InvalidSize { width: 0, .. })
        ));
    }

    #[test]
    fn test_data_dir_is_app_scoped() {
        assert!(get_data_dir().ends_with(APP_NAME));
    }
}
