//! Exporters and the artifacts they produce.
//!
//! Both exporters consume the same [`Layout`]: the stitches previewed are the
//! stitches exported. The core never touches the file system; it hands back
//! bytes plus a suggested file name.

pub mod json;
pub mod svg;

use chrono::{DateTime, Utc};

use crate::error::ExportError;
use crate::generator::{Layout, generate_layout};
use crate::params::ParameterSet;

/// Suffix of the structured record file.
pub const JSON_SUFFIX: &str = ".embro.json";
/// Suffix of the vector file.
pub const SVG_SUFFIX: &str = ".svg";

/// One serialized output, ready to be written by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    /// Suggested file name, already safe to use as a single path component
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// A layout and both of its exports.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBundle {
    pub layout: Layout,
    pub json: ExportArtifact,
    pub svg: ExportArtifact,
}

impl ExportBundle {
    /// Generate the layout for `params` and export it both ways.
    pub fn build(params: &ParameterSet, generated_on: DateTime<Utc>) -> Result<Self, ExportError> {
        Self::from_layout(params, generate_layout(params), generated_on)
    }

    /// Export an existing layout (e.g. one generated with a custom mask).
    ///
    /// An invalid color does not fail the bundle: the SVG falls back to
    /// [`crate::color::Color::FALLBACK`] and the JSON keeps the text as given.
    pub fn from_layout(
        params: &ParameterSet,
        layout: Layout,
        generated_on: DateTime<Utc>,
    ) -> Result<Self, ExportError> {
        let stem = params.file_stem();

        let json = ExportArtifact {
            file_name: format!("{stem}{JSON_SUFFIX}"),
            media_type: "application/json",
            bytes: json::serialize(params, &layout, generated_on)?,
        };
        let svg = ExportArtifact {
            file_name: format!("{stem}{SVG_SUFFIX}"),
            media_type: "image/svg+xml",
            bytes: svg::serialize_or_fallback(&layout, &params.color)?,
        };

        Ok(Self { layout, json, svg })
    }

    /// Both artifacts, record first.
    pub fn artifacts(&self) -> [&ExportArtifact; 2] {
        [&self.json, &self.svg]
    }
}
