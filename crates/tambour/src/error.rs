//! Error types for tambour.
//!
//! Generation itself has no error path (all numeric input is clamped). Errors
//! only come from untrusted color text, serialization, and outline parsing.

use thiserror::Error;

/// A color string that cannot be embedded in an SVG document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("color is empty")]
    Empty,

    /// Text outside the accepted color grammar. The offending input is kept
    /// for diagnostics; it is never written into markup.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

/// Errors that can occur while exporting a layout.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SVG write error: {0}")]
    Svg(String),
}

/// Errors from reading a custom outline out of an SVG document.
#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("SVG parse error: {0}")]
    Parse(String),

    #[error("No polygons found in SVG")]
    NoPolygons,
}
