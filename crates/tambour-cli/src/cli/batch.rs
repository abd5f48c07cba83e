//! Batch recipes: many designs from one YAML file.
//!
//! A recipe has a `defaults` parameter set and a list of `designs`, each a
//! partial parameter set merged over the defaults:
//!
//! ```yaml
//! output_dir: out          # optional, -d overrides it
//! timestamp: 2024-05-01T12:30:00Z   # optional
//! defaults:
//!   stitchCount: 400
//!   color: navy
//! designs:
//!   - designName: left-sleeve
//!     location: sleeve
//!   - designName: crest
//!     shape: circle
//!     density: 2
//! ```
//!
//! Merging happens on the YAML mappings before the parameter set is built, so
//! design entries get the same lenient number handling as everything else.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use tambour::{ParameterSet, export_batch};

use super::common::{parse_timestamp, value, write_artifact};

/// A batch recipe as read from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Where exports go when `-d` is not given
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// RFC 3339 `generatedOn` shared by every design
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Values every design starts from (camelCase parameter keys)
    #[serde(default)]
    pub defaults: Mapping,

    /// Per-design overrides
    #[serde(default)]
    pub designs: Vec<Mapping>,
}

impl Recipe {
    /// Load a recipe from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse recipe YAML")
    }

    /// One parameter set per design, in recipe order.
    pub fn parameter_sets(&self) -> Result<Vec<ParameterSet>> {
        self.designs
            .iter()
            .enumerate()
            .map(|(index, design)| {
                merge_with(design, &self.defaults)
                    .with_context(|| format!("Invalid design #{} in recipe", index + 1))
            })
            .collect()
    }
}

/// Overlay `design` on `defaults` and build the parameter set.
pub fn merge_with(design: &Mapping, defaults: &Mapping) -> Result<ParameterSet> {
    let mut merged = defaults.clone();
    for (key, val) in design {
        merged.insert(key.clone(), val.clone());
    }
    Ok(serde_yaml::from_value(Value::Mapping(merged))?)
}

/// Execute the batch command.
pub fn cmd_batch(args: &[String]) -> Result<()> {
    let mut recipe_path: Option<&str> = None;
    let mut output_dir: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-d" | "--dir" => {
                output_dir = Some(PathBuf::from(value(args, i, "--dir")?));
                i += 1;
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            path if !path.starts_with('-') => {
                if recipe_path.is_none() {
                    recipe_path = Some(path);
                }
            }
            unknown => bail!("Unknown option: {}", unknown),
        }
        i += 1;
    }

    let Some(recipe_path) = recipe_path else {
        print_usage();
        bail!("Recipe file required");
    };

    eprintln!("Loading: {}", recipe_path);
    let recipe = Recipe::load(recipe_path)?;
    let designs = recipe.parameter_sets()?;
    let generated_on = match &recipe.timestamp {
        Some(text) => parse_timestamp(text)?,
        None => chrono::Utc::now(),
    };

    let output_dir = output_dir
        .or_else(|| recipe.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut seen = HashSet::new();
    for params in &designs {
        let stem = params.file_stem();
        if !seen.insert(stem.clone()) {
            tracing::warn!(stem = %stem, "several designs share a file name, later ones overwrite earlier ones");
        }
    }

    let mut failures = 0;
    for (params, result) in designs.iter().zip(export_batch(&designs, generated_on)) {
        match result {
            Ok(bundle) => {
                for artifact in bundle.artifacts() {
                    write_artifact(&output_dir, artifact)?;
                }
            }
            Err(err) => {
                failures += 1;
                tracing::error!(design = %params.design_name, error = %err, "export failed");
            }
        }
    }

    eprintln!("Exported {} of {} designs", designs.len() - failures, designs.len());
    if failures > 0 {
        bail!("{} design(s) failed to export", failures);
    }
    Ok(())
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("tambour batch - Export every design in a YAML recipe");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    tambour batch <recipe.yaml> [-d <dir>]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -d, --dir <dir>        Output directory (default: recipe output_dir, else .)");
}
