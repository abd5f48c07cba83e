//! Export many designs at once.
//!
//! Every design is independent, so the work is spread across rayon's thread
//! pool. Results come back in input order and one failing design never stops
//! the others.

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::error::ExportError;
use crate::export::ExportBundle;
use crate::params::ParameterSet;

/// Build an [`ExportBundle`] for each parameter set, all stamped with `generated_on`.
pub fn export_batch(
    designs: &[ParameterSet],
    generated_on: DateTime<Utc>,
) -> Vec<Result<ExportBundle, ExportError>> {
    tracing::debug!(designs = designs.len(), "exporting batch");
    designs
        .par_iter()
        .map(|params| ExportBundle::build(params, generated_on))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;
    use chrono::TimeZone;

    #[test]
    fn results_keep_input_order() {
        let designs: Vec<ParameterSet> = (1..=12)
            .map(|i| ParameterSet {
                design_name: format!("design-{i}"),
                stitch_count: i * 10,
                shape: Shape::all()[i as usize % Shape::all().len()],
                ..Default::default()
            })
            .collect();

        let when = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let results = export_batch(&designs, when);

        assert_eq!(results.len(), designs.len());
        for (params, result) in designs.iter().zip(&results) {
            let bundle = result.as_ref().unwrap();
            assert_eq!(bundle.json.file_name, format!("{}.embro.json", params.design_name));
            assert_eq!(*bundle, ExportBundle::build(params, when).unwrap());
        }
    }

    #[test]
    fn empty_batch() {
        assert!(export_batch(&[], Utc::now()).is_empty());
    }
}
