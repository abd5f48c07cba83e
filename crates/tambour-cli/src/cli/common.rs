//! Common utilities shared across CLI commands.
//!
//! Every design-producing command accepts the same design options, parsed
//! here into a [`DesignArgs`].

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};

use tambour::params::{parse_density, parse_dimension, parse_stitch_count};
use tambour::{
    ExportArtifact, Layout, Outline, ParameterSet, Placement, Shape, Technique, generate_layout,
    generate_layout_with,
};

/// Output format for a single generated document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Svg,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name.to_lowercase().as_str() {
            "svg" => Some(OutputFormat::Svg),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Design options shared by `generate` and `export`.
#[derive(Debug, Clone, Default)]
pub struct DesignArgs {
    pub params: ParameterSet,
    /// SVG whose shapes bound a `custom` design
    pub outline: Option<PathBuf>,
    /// Stretch the outline's bounding box over the canvas
    pub fit_outline: bool,
    /// Pinned `generatedOn`; now when absent
    pub timestamp: Option<DateTime<Utc>>,
}

impl DesignArgs {
    /// Try to consume the design option at `args[i]`.
    ///
    /// Returns the index of the last argument consumed, or `None` when
    /// `args[i]` is not a design option.
    pub fn parse_flag(&mut self, args: &[String], i: usize) -> Result<Option<usize>> {
        let flag = args[i].as_str();
        let params = &mut self.params;

        match flag {
            "-n" | "--name" => params.design_name = value(args, i, flag)?.to_string(),
            "-l" | "--location" => {
                let name = value(args, i, flag)?;
                params.location = Placement::from_name(name).with_context(|| {
                    format!("Unknown location: {}. Use 'tambour options' to list available.", name)
                })?;
            }
            "-m" | "--method" => {
                let name = value(args, i, flag)?;
                params.method = Technique::from_name(name).with_context(|| {
                    format!("Unknown method: {}. Use 'tambour options' to list available.", name)
                })?;
            }
            "-s" | "--shape" => {
                let name = value(args, i, flag)?;
                params.shape = Shape::from_name(name).with_context(|| {
                    format!("Unknown shape: {}. Use 'tambour options' to list available.", name)
                })?;
            }
            "-c" | "--count" => params.stitch_count = parse_stitch_count(value(args, i, flag)?),
            "--density" => params.density = parse_density(value(args, i, flag)?),
            "--color" => params.color = value(args, i, flag)?.to_string(),
            "-W" | "--width" => params.width = parse_dimension(value(args, i, flag)?, params.width),
            "-H" | "--height" => params.height = parse_dimension(value(args, i, flag)?, params.height),
            "--outline" => self.outline = Some(PathBuf::from(value(args, i, flag)?)),
            "--fit-outline" => {
                self.fit_outline = true;
                return Ok(Some(i));
            }
            "--timestamp" => self.timestamp = Some(parse_timestamp(value(args, i, flag)?)?),
            _ => return Ok(None),
        }
        Ok(Some(i + 1))
    }

    /// Timestamp to stamp into the record.
    pub fn generated_on(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or_else(Utc::now)
    }

    /// Generate the layout, applying `--outline` for custom designs.
    pub fn layout(&self) -> Result<Layout> {
        let Some(path) = &self.outline else {
            return Ok(generate_layout(&self.params));
        };

        if self.params.shape != Shape::Custom {
            tracing::warn!(
                outline = %path.display(),
                shape = self.params.shape.name(),
                "--outline only applies to the custom shape, ignoring it"
            );
            return Ok(generate_layout(&self.params));
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read outline {}", path.display()))?;
        let mut outline = Outline::from_svg(&content)
            .with_context(|| format!("Failed to load outline {}", path.display()))?;

        if self.fit_outline {
            let (width, height) = self.params.effective_bounds();
            outline = outline.fitted(width, height);
        }

        tracing::info!(polygons = outline.polygons.len(), "using custom outline");
        Ok(generate_layout_with(&self.params, &outline))
    }
}

/// Value following `args[i]`, or an error naming the flag.
pub fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    match args.get(i + 1) {
        Some(v) => Ok(v.as_str()),
        None => bail!("Missing value for {}", flag),
    }
}

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(text.trim())
        .with_context(|| format!("Invalid timestamp: {} (expected RFC 3339, e.g. 2024-05-01T12:30:00Z)", text))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Write bytes to a file, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Write an export artifact into `dir` under its suggested file name.
pub fn write_artifact(dir: &Path, artifact: &ExportArtifact) -> Result<PathBuf> {
    let path = dir.join(&artifact.file_name);
    write_output(Some(&path), &artifact.bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn parse_all(list: &[&str]) -> Result<DesignArgs> {
        let args = args(list);
        let mut design = DesignArgs::default();
        let mut i = 0;
        while i < args.len() {
            match design.parse_flag(&args, i)? {
                Some(last) => i = last + 1,
                None => bail!("not a design flag: {}", args[i]),
            }
        }
        Ok(design)
    }

    #[test]
    fn design_flags_fill_parameters() {
        let design = parse_all(&[
            "-n", "rose", "-l", "sleeve", "-m", "tatami", "-c", "250", "--density", "3",
            "--color", "navy", "-s", "oval", "-W", "300", "-H", "90", "--fit-outline",
        ])
        .unwrap();

        let p = &design.params;
        assert_eq!(p.design_name, "rose");
        assert_eq!(p.location, Placement::Sleeve);
        assert_eq!(p.method, Technique::Fill);
        assert_eq!((p.stitch_count, p.density), (250, 3));
        assert_eq!(p.color, "navy");
        assert_eq!(p.shape, Shape::Oval);
        assert_eq!((p.width, p.height), (300.0, 90.0));
        assert!(design.fit_outline);
    }

    #[test]
    fn numbers_are_normalized_not_rejected() {
        let design = parse_all(&["-c", "lots", "--density", "99", "-W", "-4"]).unwrap();
        assert_eq!(design.params.stitch_count, 1);
        assert_eq!(design.params.density, 10);
        assert_eq!(design.params.width, 200.0);
    }

    #[test]
    fn unknown_names_are_errors() {
        assert!(parse_all(&["-s", "hexagon"]).is_err());
        assert!(parse_all(&["-l", "hat"]).is_err());
        assert!(parse_all(&["--count"]).is_err());
    }

    #[test]
    fn non_design_flags_are_left_alone() {
        let args = args(&["-o", "out.svg"]);
        assert_eq!(DesignArgs::default().parse_flag(&args, 0).unwrap(), None);
    }

    #[test]
    fn timestamps() {
        let ts = parse_timestamp("2024-05-01T14:30:00+02:00").unwrap();
        assert_eq!(tambour::export::json::format_timestamp(&ts), "2024-05-01T12:30:00.000Z");
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn outline_ignored_for_builtin_shapes() {
        let design = DesignArgs {
            outline: Some(PathBuf::from("/does/not/exist.svg")),
            ..Default::default()
        };
        // Rectangle: the missing outline file is never opened
        assert_eq!(design.layout().unwrap().len(), 1200);
    }
}
