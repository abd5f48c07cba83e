//! Structured interchange record (`<name>.embro.json`).
//!
//! The record carries every design parameter verbatim (including the ones the
//! generator ignores) plus the ordered stitch list and a generation
//! timestamp. Key order is fixed by the struct definitions, so identical
//! inputs and timestamp always give identical bytes.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::generator::Layout;
use crate::geometry::StitchPoint;
use crate::params::ParameterSet;

/// The exported record, as written and as read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRecord {
    #[serde(flatten)]
    pub parameters: ParameterSet,
    #[serde(with = "iso8601_millis")]
    pub generated_on: DateTime<Utc>,
    pub stitches: Vec<StitchPoint>,
}

impl DesignRecord {
    pub fn new(params: &ParameterSet, layout: &Layout, generated_on: DateTime<Utc>) -> Self {
        Self {
            parameters: params.clone(),
            generated_on,
            stitches: layout.points.clone(),
        }
    }

    /// Split a saved record back into its parameters and layout.
    pub fn into_parts(self) -> (ParameterSet, Layout) {
        let (width, height) = self.parameters.effective_bounds();
        (self.parameters, Layout::new(self.stitches, width, height))
    }
}

/// Serialize a design as pretty-printed JSON (2-space indent).
pub fn serialize(
    params: &ParameterSet,
    layout: &Layout,
    generated_on: DateTime<Utc>,
) -> Result<Vec<u8>, ExportError> {
    let record = DesignRecord::new(params, layout, generated_on);
    Ok(serde_json::to_vec_pretty(&record)?)
}

/// Parse a previously exported record.
pub fn parse(bytes: &[u8]) -> Result<DesignRecord, ExportError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-05-01T12:30:00.000Z`.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

mod iso8601_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
