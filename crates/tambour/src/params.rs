//! Design parameters and the normalization rules applied to them.
//!
//! A [`ParameterSet`] is built fresh for every edit and never mutated by the
//! generator. Numeric inputs are never rejected: anything out of range,
//! negative or non-numeric is clamped to the nearest usable value so a layout
//! can always be produced.

use serde::{Deserialize, Deserializer, Serialize};

use crate::shape::{Placement, Shape, Technique};

/// Default canvas width in logical units.
pub const DEFAULT_WIDTH: f64 = 200.0;
/// Default canvas height in logical units.
pub const DEFAULT_HEIGHT: f64 = 120.0;

pub const DEFAULT_STITCH_COUNT: u32 = 1200;
pub const DEFAULT_DENSITY: u8 = 5;
pub const DEFAULT_COLOR: &str = "#ff0000";

/// Name used when the requested design name is empty or unusable as a file name.
pub const DEFAULT_DESIGN_NAME: &str = "customer_design";

/// Tightest density (closest spacing).
pub const MIN_DENSITY: u8 = 1;
/// Loosest density.
pub const MAX_DENSITY: u8 = 10;

/// Upper bound on generated stitches. Keeps a typo like `12000000000`
/// from allocating gigabytes; counts above it are generated as this value
/// (with a warning) while the parameter set keeps what was asked for.
pub const MAX_STITCH_COUNT: u32 = 1_000_000;

const MAX_FILE_STEM_CHARS: usize = 120;

/// Everything the user chose for one design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterSet {
    /// Used for output file names only
    pub design_name: String,
    /// Descriptive only, no effect on geometry
    pub location: Placement,
    /// Descriptive only, no effect on geometry
    pub method: Technique,
    /// Target number of stitches
    #[serde(deserialize_with = "lenient_stitch_count")]
    pub stitch_count: u32,
    /// 1 (tight) ..= 10 (loose)
    #[serde(deserialize_with = "lenient_density")]
    pub density: u8,
    /// Raw color text; validated by the SVG exporter, not here
    pub color: String,
    pub shape: Shape,
    /// Canvas width
    #[serde(deserialize_with = "lenient_width")]
    pub width: f64,
    /// Canvas height
    #[serde(deserialize_with = "lenient_height")]
    pub height: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            design_name: DEFAULT_DESIGN_NAME.to_string(),
            location: Placement::default(),
            method: Technique::default(),
            stitch_count: DEFAULT_STITCH_COUNT,
            density: DEFAULT_DENSITY,
            color: DEFAULT_COLOR.to_string(),
            shape: Shape::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl ParameterSet {
    /// Stitch count the generator actually works with: `1..=MAX_STITCH_COUNT`.
    #[inline]
    pub fn effective_stitch_count(&self) -> u32 {
        self.stitch_count.clamp(1, MAX_STITCH_COUNT)
    }

    /// Density clamped to `MIN_DENSITY..=MAX_DENSITY`.
    #[inline]
    pub fn effective_density(&self) -> u8 {
        self.density.clamp(MIN_DENSITY, MAX_DENSITY)
    }

    /// Canvas (width, height), falling back to the defaults for
    /// non-finite or non-positive values.
    pub fn effective_bounds(&self) -> (f64, f64) {
        (
            positive_or(self.width, DEFAULT_WIDTH),
            positive_or(self.height, DEFAULT_HEIGHT),
        )
    }

    /// Design name made safe for use as a file name stem.
    ///
    /// Path separators, control characters and the characters Windows
    /// forbids are replaced with `_`; leading/trailing dots and whitespace
    /// are dropped. Non-ASCII letters are kept as-is.
    pub fn file_stem(&self) -> String {
        let cleaned: String = self
            .design_name
            .chars()
            .map(|c| match c {
                '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .take(MAX_FILE_STEM_CHARS)
            .collect();

        let trimmed = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
        if trimmed.is_empty() || trimmed.chars().all(|c| c == '_') {
            tracing::warn!(
                design_name = %self.design_name,
                "design name unusable as a file name, using default"
            );
            DEFAULT_DESIGN_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[inline]
fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { fallback }
}

// ============================================================================
// LENIENT NUMERIC PARSING
// ============================================================================
//
// ## Rust Lesson #12: Total Functions
//
// These helpers have no error path at all. Bad input maps to the minimum
// valid value, which is what the form did when a field was cleared.

/// Stitch count from any float: NaN and values below 1 become 1.
pub fn stitch_count_from_f64(value: f64) -> u32 {
    if value.is_nan() {
        return 1;
    }
    // `as u32` saturates at u32::MAX for large values and +inf
    value.round().max(1.0) as u32
}

/// Stitch count from user text. Non-numeric text becomes 1.
pub fn parse_stitch_count(text: &str) -> u32 {
    stitch_count_from_f64(text.trim().parse::<f64>().unwrap_or(f64::NAN))
}

/// Density from any float, rounded and clamped to `MIN_DENSITY..=MAX_DENSITY`.
pub fn density_from_f64(value: f64) -> u8 {
    if value.is_nan() {
        return MIN_DENSITY;
    }
    value.round().clamp(MIN_DENSITY as f64, MAX_DENSITY as f64) as u8
}

/// Density from user text. Non-numeric text becomes `MIN_DENSITY`.
pub fn parse_density(text: &str) -> u8 {
    density_from_f64(text.trim().parse::<f64>().unwrap_or(f64::NAN))
}

/// Canvas dimension from user text, `fallback` unless positive and finite.
pub fn parse_dimension(text: &str, fallback: f64) -> f64 {
    positive_or(text.trim().parse::<f64>().unwrap_or(f64::NAN), fallback)
}

/// Any JSON/YAML scalar a user might type into a numeric field.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl LooseNumber {
    fn as_f64(&self) -> f64 {
        match self {
            LooseNumber::Number(n) => *n,
            LooseNumber::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            LooseNumber::Other(_) => f64::NAN,
        }
    }
}

fn lenient_stitch_count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(stitch_count_from_f64(LooseNumber::deserialize(d)?.as_f64()))
}

fn lenient_density<'de, D: Deserializer<'de>>(d: D) -> Result<u8, D::Error> {
    Ok(density_from_f64(LooseNumber::deserialize(d)?.as_f64()))
}

fn lenient_width<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(positive_or(LooseNumber::deserialize(d)?.as_f64(), DEFAULT_WIDTH))
}

fn lenient_height<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(positive_or(LooseNumber::deserialize(d)?.as_f64(), DEFAULT_HEIGHT))
}
