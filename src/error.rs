//! Error types

use thiserror::Error;

/// Raised when a selection names no registered page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Page '{0}' not found")]
pub struct UnknownPageError(pub String);

impl UnknownPageError {
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Failures while turning an embedded asset into pixels
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to parse SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("Cannot rasterize at {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}
